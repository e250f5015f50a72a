//! Status change history, ordered for display

use super::aggregate::StatusHistoryDto;
use super::badge::{badge_for_raw, BadgeSpec};
use chrono::{DateTime, Utc};

pub const EMPTY_TIMELINE_PLACEHOLDER: &str = "No status history yet.";

/// A recorded status change, read-only on the client
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTransition {
    pub previous_status: String,
    pub new_status: String,
    pub changed_by: String,
    pub reason: Option<String>,
    /// `None` when the backend timestamp is not valid RFC 3339
    pub occurred_at: Option<DateTime<Utc>>,
    pub occurred_at_raw: String,
}

impl From<&StatusHistoryDto> for StatusTransition {
    fn from(dto: &StatusHistoryDto) -> Self {
        Self {
            previous_status: dto.previous_status.clone(),
            new_status: dto.new_status.clone(),
            changed_by: dto.changed_by.clone(),
            reason: dto
                .reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            occurred_at: DateTime::parse_from_rfc3339(dto.created_at.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            occurred_at_raw: dto.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub from: BadgeSpec,
    pub to: BadgeSpec,
    pub changed_by: String,
    pub reason: Option<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub occurred_at_raw: String,
}

impl TimelineEntry {
    /// True when the change moved the order back along the pipeline (a correction)
    pub fn is_backward(&self) -> bool {
        match (self.from.status, self.to.status) {
            (Some(from), Some(to)) => to.position() < from.position(),
            _ => false,
        }
    }
}

impl From<StatusTransition> for TimelineEntry {
    fn from(t: StatusTransition) -> Self {
        Self {
            from: badge_for_raw(&t.previous_status),
            to: badge_for_raw(&t.new_status),
            changed_by: t.changed_by,
            reason: t.reason,
            occurred_at: t.occurred_at,
            occurred_at_raw: t.occurred_at_raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Timeline {
    /// Nothing recorded; rendered as [`EMPTY_TIMELINE_PLACEHOLDER`]
    Empty,
    /// Most recent first
    Entries(Vec<TimelineEntry>),
}

impl Timeline {
    pub fn len(&self) -> usize {
        match self {
            Timeline::Empty => 0,
            Timeline::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort history newest first, whatever order it arrived in.
///
/// Entries with an unparseable timestamp go last. Equal timestamps keep their
/// arrival order.
pub fn build_timeline(history: &[StatusHistoryDto]) -> Timeline {
    if history.is_empty() {
        return Timeline::Empty;
    }

    let mut entries: Vec<TimelineEntry> = history
        .iter()
        .map(StatusTransition::from)
        .map(TimelineEntry::from)
        .collect();
    entries.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    Timeline::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_transaction::status::OrderStatus;

    fn history(prev: &str, new: &str, at: &str) -> StatusHistoryDto {
        StatusHistoryDto {
            id: 0,
            transaction_id: 1,
            previous_status: prev.to_string(),
            new_status: new.to_string(),
            changed_by: "admin".to_string(),
            reason: None,
            created_at: at.to_string(),
        }
    }

    fn entries(timeline: Timeline) -> Vec<TimelineEntry> {
        match timeline {
            Timeline::Entries(entries) => entries,
            Timeline::Empty => panic!("expected entries"),
        }
    }

    #[test]
    fn test_sorted_descending() {
        let input = vec![
            history("", "antrian", "2025-12-01T08:00:10Z"),
            history("mencuci", "menyetrika", "2025-12-01T08:00:30Z"),
            history("antrian", "mencuci", "2025-12-01T08:00:20Z"),
        ];
        let result = entries(build_timeline(&input));
        let seconds: Vec<String> = result
            .iter()
            .map(|e| e.occurred_at.unwrap().format("%S").to_string())
            .collect();
        assert_eq!(seconds, vec!["30", "20", "10"]);
    }

    #[test]
    fn test_mixed_offsets_compare_by_instant() {
        let input = vec![
            history("", "antrian", "2025-12-01T15:00:00+07:00"),
            history("antrian", "mencuci", "2025-12-01T09:00:00Z"),
        ];
        let result = entries(build_timeline(&input));
        assert_eq!(result[0].to.status, Some(OrderStatus::Washing));
    }

    #[test]
    fn test_empty_history_is_placeholder() {
        let timeline = build_timeline(&[]);
        assert_eq!(timeline, Timeline::Empty);
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_backward_move_renders_both_labels() {
        let input = vec![history("selesai", "mencuci", "2025-12-02T10:00:00Z")];
        let result = entries(build_timeline(&input));
        assert_eq!(result[0].from.label, "Complete");
        assert_eq!(result[0].to.label, "Washing");
        assert!(result[0].is_backward());
    }

    #[test]
    fn test_unknown_statuses_and_initial_record() {
        let input = vec![history("", "lost_and_found", "2025-12-02T10:00:00Z")];
        let result = entries(build_timeline(&input));
        assert_eq!(result[0].from.label, "-");
        assert_eq!(result[0].to.label, "lost_and_found");
        assert!(!result[0].is_backward());
    }

    #[test]
    fn test_unparseable_timestamp_sorts_last() {
        let input = vec![
            history("", "antrian", "yesterday"),
            history("antrian", "mencuci", "2025-12-01T08:00:00Z"),
        ];
        let result = entries(build_timeline(&input));
        assert_eq!(result.len(), 2);
        assert!(result[0].occurred_at.is_some());
        assert_eq!(result[1].occurred_at, None);
        assert_eq!(result[1].occurred_at_raw, "yesterday");
    }

    #[test]
    fn test_blank_reason_is_none() {
        let mut dto = history("antrian", "mencuci", "2025-12-01T08:00:00Z");
        dto.reason = Some("  ".to_string());
        assert_eq!(StatusTransition::from(&dto).reason, None);

        dto.reason = Some("Started washing".to_string());
        assert_eq!(
            StatusTransition::from(&dto).reason.as_deref(),
            Some("Started washing")
        );
    }
}
