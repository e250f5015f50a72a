use super::aggregate::ServicePriceDto;
use serde::{Deserialize, Serialize};

fn validate_fields(service_type: &str, item_name: &str, price: f64) -> Result<(), String> {
    if service_type.trim().is_empty() {
        return Err("Service type is required".into());
    }
    if item_name.trim().is_empty() {
        return Err("Item name is required".into());
    }
    if price.is_nan() || price <= 0.0 {
        return Err("Price must be greater than zero".into());
    }
    Ok(())
}

/// Body of `POST /service-prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServicePriceRequest {
    pub service_type: String,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

/// Body of `PUT /service-prices/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateServicePriceRequest {
    pub service_type: String,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<&ServicePriceDto> for CreateServicePriceRequest {
    fn from(dto: &ServicePriceDto) -> Self {
        Self {
            service_type: dto.service_type.trim().to_string(),
            item_name: dto.item_name.trim().to_string(),
            description: dto.description.trim().to_string(),
            price: dto.price,
        }
    }
}

impl From<&ServicePriceDto> for UpdateServicePriceRequest {
    fn from(dto: &ServicePriceDto) -> Self {
        Self {
            service_type: dto.service_type.trim().to_string(),
            item_name: dto.item_name.trim().to_string(),
            description: dto.description.trim().to_string(),
            price: dto.price,
            is_active: Some(dto.is_active),
        }
    }
}

impl CreateServicePriceRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.service_type, &self.item_name, self.price)
    }
}

impl UpdateServicePriceRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_fields(&self.service_type, &self.item_name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: f64) -> ServicePriceDto {
        ServicePriceDto {
            service_type: " reguler ".to_string(),
            item_name: "Kemeja".to_string(),
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_create_from_form_trims() {
        let request = CreateServicePriceRequest::from(&form(5000.0));
        assert_eq!(request.service_type, "reguler");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(CreateServicePriceRequest::from(&form(0.0)).validate().is_err());
        assert!(CreateServicePriceRequest::from(&form(f64::NAN)).validate().is_err());
        assert!(UpdateServicePriceRequest::from(&form(-1.0)).validate().is_err());
    }

    #[test]
    fn test_update_carries_active_flag() {
        let mut dto = form(7000.0);
        dto.is_active = false;
        let json = serde_json::to_value(UpdateServicePriceRequest::from(&dto)).unwrap();
        assert_eq!(json["is_active"], false);
        assert_eq!(json["price"], 7000.0);
    }
}
