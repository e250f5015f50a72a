use crate::domain::a001_transaction::OrderStatus;
use serde::{Deserialize, Serialize};

/// Response of `GET /transactions/dashboard`: transaction count per pipeline stage.
///
/// Keys are the backend's stored status codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummaryResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub antrian: u64,
    #[serde(default)]
    pub mencuci: u64,
    #[serde(default)]
    pub menyetrika: u64,
    #[serde(default)]
    pub siap_diambil: u64,
    #[serde(default)]
    pub selesai: u64,
}

impl StatusSummaryResponse {
    pub fn count_for(&self, status: OrderStatus) -> u64 {
        match status {
            OrderStatus::Queued => self.antrian,
            OrderStatus::Washing => self.mencuci,
            OrderStatus::Ironing => self.menyetrika,
            OrderStatus::ReadyToPickUp => self.siap_diambil,
            OrderStatus::Complete => self.selesai,
        }
    }

    /// Counts in pipeline order
    pub fn rows(&self) -> Vec<(OrderStatus, u64)> {
        OrderStatus::PIPELINE
            .iter()
            .map(|s| (*s, self.count_for(*s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_pipeline_order() {
        let json = r#"{"antrian": 4, "mencuci": 2, "menyetrika": 1, "siap_diambil": 3, "selesai": 10, "total": 20}"#;
        let summary: StatusSummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            summary.rows(),
            vec![
                (OrderStatus::Queued, 4),
                (OrderStatus::Washing, 2),
                (OrderStatus::Ironing, 1),
                (OrderStatus::ReadyToPickUp, 3),
                (OrderStatus::Complete, 10),
            ]
        );
        assert_eq!(summary.total, 20);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let summary: StatusSummaryResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert_eq!(summary.count_for(OrderStatus::Washing), 0);
    }
}
