use serde::{Deserialize, Serialize};

/// Service price as returned by `GET /service-prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePriceDto {
    #[serde(default)]
    pub id: u64,
    /// e.g. "reguler", "express"
    pub service_type: String,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    /// RFC 3339
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn active_by_default() -> bool {
    true
}

impl Default for ServicePriceDto {
    fn default() -> Self {
        Self {
            id: 0,
            service_type: String::new(),
            item_name: String::new(),
            description: String::new(),
            price: 0.0,
            is_active: true,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl ServicePriceDto {
    /// A new price has not been stored yet
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}
