use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The backend serializes an unset pickup date as the zero date
fn meaningful_date(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.starts_with("0001-01-01"))
        .map(str::to_string)
}

/// One recorded status change, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub transaction_id: u64,
    /// Empty for the record written when the transaction is created
    #[serde(default)]
    pub previous_status: String,
    pub new_status: String,
    #[serde(default)]
    pub changed_by: String,
    #[serde(default)]
    pub reason: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionItemDto {
    #[serde(default)]
    pub id: u64,
    pub service_type: String,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// Full transaction as returned by `GET /transactions/{id}` and the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetailDto {
    pub id: u64,
    pub transaction_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub notes: String,
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<TransactionItemDto>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_history: Vec<StatusHistoryDto>,
    /// Unix milliseconds
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Public tracking view returned by `GET /track/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingDto {
    pub transaction_code: String,
    pub customer_name: String,
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub items_count: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_history: Vec<StatusHistoryDto>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// What the status widgets render: one order at one point in time.
///
/// `status` is kept raw so the badge can still show an unknown value.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    pub code: String,
    pub customer_name: String,
    pub item_count: u32,
    pub total_price: f64,
    pub is_paid: bool,
    pub pickup_date: Option<String>,
    pub status: String,
    pub history: Vec<StatusHistoryDto>,
}

impl TrackingDto {
    /// Pickup date, `None` when unset
    pub fn pickup_date(&self) -> Option<String> {
        meaningful_date(&self.pickup_date)
    }
}

impl TransactionDetailDto {
    /// Pickup date, `None` when unset
    pub fn pickup_date(&self) -> Option<String> {
        meaningful_date(&self.pickup_date)
    }
}

impl From<&TrackingDto> for OrderSnapshot {
    fn from(dto: &TrackingDto) -> Self {
        Self {
            code: dto.transaction_code.clone(),
            customer_name: dto.customer_name.clone(),
            item_count: dto.items_count,
            total_price: dto.total_price,
            is_paid: dto.is_paid,
            pickup_date: dto.pickup_date(),
            status: dto.status.clone(),
            history: dto.status_history.clone(),
        }
    }
}

impl From<&TransactionDetailDto> for OrderSnapshot {
    fn from(dto: &TransactionDetailDto) -> Self {
        Self {
            code: dto.transaction_code.clone(),
            customer_name: dto.customer_name.clone(),
            item_count: dto.items.len() as u32,
            total_price: dto.total_price,
            is_paid: dto.is_paid,
            pickup_date: dto.pickup_date(),
            status: dto.status.clone(),
            history: dto.status_history.clone(),
        }
    }
}

/// Page of transactions from `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<TransactionDetailDto>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_dto_with_null_history() {
        let json = r#"{
            "transaction_code": "CHRN-20251201-ABC12",
            "customer_name": "Budi",
            "status": "mencuci",
            "total_price": 45000,
            "is_paid": false,
            "pickup_date": "0001-01-01T00:00:00Z",
            "items_count": 3,
            "status_history": null,
            "created_at": 1733011200000,
            "updated_at": 1733011200000
        }"#;
        let dto: TrackingDto = serde_json::from_str(json).unwrap();
        assert!(dto.status_history.is_empty());

        let snapshot = OrderSnapshot::from(&dto);
        assert_eq!(snapshot.code, "CHRN-20251201-ABC12");
        assert_eq!(snapshot.item_count, 3);
        assert_eq!(snapshot.pickup_date, None);
        assert_eq!(snapshot.status, "mencuci");
    }

    #[test]
    fn test_detail_dto_snapshot_counts_items() {
        let json = r#"{
            "id": 7,
            "transaction_code": "CHRN-1",
            "customer_name": "Sari",
            "customer_phone": "0812",
            "customer_address": "Jl. Mawar 1",
            "notes": "",
            "status": "selesai",
            "total_price": 20000,
            "is_paid": true,
            "pickup_date": "2025-12-03T00:00:00Z",
            "completed_at": null,
            "items": [
                {"id": 1, "service_type": "reguler", "item_name": "kemeja", "quantity": 2, "unit_price": 5000, "subtotal": 10000},
                {"id": 2, "service_type": "express", "item_name": "celana", "quantity": 1, "unit_price": 10000, "subtotal": 10000}
            ],
            "status_history": [
                {"id": 1, "transaction_id": 7, "previous_status": "", "new_status": "antrian", "changed_by": "admin", "reason": "Transaction created", "created_at": "2025-12-01T08:00:00Z"}
            ],
            "created_at": 1733011200000,
            "updated_at": 1733011200000
        }"#;
        let dto: TransactionDetailDto = serde_json::from_str(json).unwrap();
        let snapshot = OrderSnapshot::from(&dto);
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.pickup_date.as_deref(), Some("2025-12-03T00:00:00Z"));
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.history[0].previous_status, "");
    }
}
