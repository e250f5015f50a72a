use contracts::domain::a001_transaction::OrderStatus;

/// DOM ids the presenter writes into. Each page owns its markup and passes its
/// own set, so two pages never depend on the same global element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAnchors {
    /// Step element id is `{step_id_prefix}{stage key}`
    pub step_id_prefix: String,
    pub progress_bar_id: String,
    pub timeline_id: String,
    pub badge_id: String,
}

impl StatusAnchors {
    /// Anchors of the public tracking page
    pub fn tracking() -> Self {
        Self {
            step_id_prefix: "track-step-".to_string(),
            progress_bar_id: "track-progress-bar".to_string(),
            timeline_id: "track-timeline".to_string(),
            badge_id: "track-status-badge".to_string(),
        }
    }

    /// Anchors of the admin transaction detail page
    pub fn details() -> Self {
        Self {
            step_id_prefix: "trx-step-".to_string(),
            progress_bar_id: "trx-progress-bar".to_string(),
            timeline_id: "trx-timeline".to_string(),
            badge_id: "trx-status-badge".to_string(),
        }
    }

    pub fn step_id(&self, stage: OrderStatus) -> String {
        format!("{}{}", self.step_id_prefix, stage.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_ids() {
        let anchors = StatusAnchors::tracking();
        assert_eq!(
            anchors.step_id(OrderStatus::ReadyToPickUp),
            "track-step-ready-to-pick-up"
        );
        assert_eq!(
            StatusAnchors::details().step_id(OrderStatus::Queued),
            "trx-step-queued"
        );
    }

    #[test]
    fn test_pages_do_not_share_ids() {
        let a = StatusAnchors::tracking();
        let b = StatusAnchors::details();
        assert_ne!(a.badge_id, b.badge_id);
        assert_ne!(a.timeline_id, b.timeline_id);
        assert_ne!(a.progress_bar_id, b.progress_bar_id);
        assert_ne!(a.step_id_prefix, b.step_id_prefix);
    }
}
