use super::aggregate::OrderSnapshot;
use super::badge::{badge_for_raw, BadgeSpec};
use super::pipeline::PipelineView;
use super::status::{OrderStatus, StatusError};
use super::timeline::{build_timeline, Timeline};

/// Browser-independent result of presenting one [`OrderSnapshot`].
///
/// The badge always renders. The pipeline widgets only render when the status is
/// recognized; otherwise `pipeline` carries the error and the caller skips them.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusPresentation {
    pub badge: BadgeSpec,
    pub pipeline: Result<PipelineView, StatusError>,
    pub timeline: Timeline,
}

impl StatusPresentation {
    pub fn from_snapshot(snapshot: &OrderSnapshot) -> Self {
        Self {
            badge: badge_for_raw(&snapshot.status),
            pipeline: OrderStatus::normalize(&snapshot.status).map(PipelineView::for_status),
            timeline: build_timeline(&snapshot.history),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_transaction::aggregate::StatusHistoryDto;

    fn snapshot(status: &str) -> OrderSnapshot {
        OrderSnapshot {
            code: "CHRN-1".to_string(),
            customer_name: "Budi".to_string(),
            item_count: 1,
            total_price: 15000.0,
            is_paid: false,
            pickup_date: None,
            status: status.to_string(),
            history: vec![StatusHistoryDto {
                id: 1,
                transaction_id: 1,
                previous_status: String::new(),
                new_status: "antrian".to_string(),
                changed_by: "admin".to_string(),
                reason: None,
                created_at: "2025-12-01T08:00:00Z".to_string(),
            }],
        }
    }

    #[test]
    fn test_recognized_status() {
        let presentation = StatusPresentation::from_snapshot(&snapshot("menyetrika"));
        assert_eq!(presentation.badge.label, "Ironing");
        let pipeline = presentation.pipeline.unwrap();
        assert_eq!(pipeline.position, 2);
        assert_eq!(pipeline.percent, 50);
        assert_eq!(presentation.timeline.len(), 1);
    }

    #[test]
    fn test_unrecognized_status_keeps_badge_and_timeline() {
        let presentation = StatusPresentation::from_snapshot(&snapshot("on_hold"));
        assert_eq!(presentation.badge.label, "on_hold");
        assert_eq!(
            presentation.pipeline,
            Err(StatusError::Unrecognized {
                raw: "on_hold".to_string()
            })
        );
        assert_eq!(presentation.timeline.len(), 1);
    }
}
