use super::aggregate::TransactionDetailDto;
use super::status::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `PUT /transactions/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub new_status: OrderStatus,
    pub reason: String,
}

/// Query of `GET /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Default for TransactionListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            status: None,
        }
    }
}

/// One line of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionItemRequest {
    pub service_type: String,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl CreateTransactionItemRequest {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub notes: String,
    pub total_price: f64,
    /// `YYYY-MM-DD`, empty when not scheduled
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pickup_date: String,
    pub items: Vec<CreateTransactionItemRequest>,
}

impl CreateTransactionRequest {
    /// The backend stores the total it is sent; it is always the sum of the lines
    pub fn with_items(mut self, items: Vec<CreateTransactionItemRequest>) -> Self {
        self.total_price = items.iter().map(CreateTransactionItemRequest::subtotal).sum();
        self.items = items;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required".into());
        }
        if self.customer_phone.trim().is_empty() {
            return Err("Customer phone is required".into());
        }
        if self.items.is_empty() {
            return Err("Add at least one item".into());
        }
        if let Some(item) = self.items.iter().find(|i| i.quantity <= 0) {
            return Err(format!("Quantity of {} must be at least 1", item.item_name));
        }
        if !self.pickup_date.is_empty()
            && NaiveDate::parse_from_str(&self.pickup_date, "%Y-%m-%d").is_err()
        {
            return Err("Pickup date must be YYYY-MM-DD".into());
        }
        Ok(())
    }
}

/// Body of `PUT /transactions/{id}`.
///
/// The backend treats empty strings as "keep the current value" and never
/// touches items, the total or the pickup date through this endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
}

impl From<&TransactionDetailDto> for UpdateTransactionRequest {
    fn from(dto: &TransactionDetailDto) -> Self {
        Self {
            customer_name: dto.customer_name.clone(),
            customer_phone: dto.customer_phone.clone(),
            customer_address: dto.customer_address.clone(),
            notes: dto.notes.clone(),
            is_paid: Some(dto.is_paid),
        }
    }
}

impl UpdateTransactionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required".into());
        }
        if self.customer_phone.trim().is_empty() {
            return Err("Customer phone is required".into());
        }
        Ok(())
    }
}

/// What `POST /transactions` answers with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedTransactionDto {
    pub id: u64,
    pub transaction_code: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub is_paid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_status_request_uses_wire_code() {
        let request = UpdateStatusRequest {
            new_status: OrderStatus::ReadyToPickUp,
            reason: "Ironing done".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["new_status"], "siap_diambil");
        assert_eq!(json["reason"], "Ironing done");
    }

    fn item(name: &str, quantity: i32, unit_price: f64) -> CreateTransactionItemRequest {
        CreateTransactionItemRequest {
            service_type: "reguler".to_string(),
            item_name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    fn customer() -> CreateTransactionRequest {
        CreateTransactionRequest {
            customer_name: "Budi".to_string(),
            customer_phone: "08123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let request = customer().with_items(vec![item("kemeja", 3, 5000.0), item("selimut", 1, 25000.0)]);
        assert_eq!(request.total_price, 40000.0);
        assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][0]["unit_price"], 5000.0);
        assert!(json.get("pickup_date").is_none());
    }

    #[test]
    fn test_create_validation() {
        assert_eq!(
            customer().validate().unwrap_err(),
            "Add at least one item"
        );

        let zero = customer().with_items(vec![item("kemeja", 0, 5000.0)]);
        assert!(zero.validate().unwrap_err().contains("kemeja"));

        let mut no_phone = customer().with_items(vec![item("kemeja", 1, 5000.0)]);
        no_phone.customer_phone = "  ".to_string();
        assert_eq!(no_phone.validate().unwrap_err(), "Customer phone is required");

        let mut bad_date = customer().with_items(vec![item("kemeja", 1, 5000.0)]);
        bad_date.pickup_date = "03/12/2025".to_string();
        assert!(bad_date.validate().is_err());
        bad_date.pickup_date = "2025-12-03".to_string();
        assert!(bad_date.validate().is_ok());
    }

    #[test]
    fn test_update_prefilled_from_detail() {
        let dto = TransactionDetailDto {
            customer_name: "Siti".to_string(),
            customer_phone: "0812".to_string(),
            notes: "Fragile".to_string(),
            is_paid: true,
            ..Default::default()
        };
        let request = UpdateTransactionRequest::from(&dto);
        assert_eq!(request.is_paid, Some(true));
        assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["is_paid"], true);
        assert!(json.get("total_price").is_none());
    }
}
