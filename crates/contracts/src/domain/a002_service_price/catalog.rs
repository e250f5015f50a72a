use super::aggregate::ServicePriceDto;
use std::collections::BTreeSet;

/// Active prices, looked up by service type and item when an order is entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceCatalog {
    prices: Vec<ServicePriceDto>,
}

impl PriceCatalog {
    pub fn new(prices: Vec<ServicePriceDto>) -> Self {
        Self {
            prices: prices.into_iter().filter(|p| p.is_active).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Distinct service types, sorted
    pub fn service_types(&self) -> Vec<String> {
        self.prices
            .iter()
            .map(|p| p.service_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Items offered for one service type, in list order
    pub fn items_for(&self, service_type: &str) -> Vec<&ServicePriceDto> {
        self.prices
            .iter()
            .filter(|p| p.service_type == service_type)
            .collect()
    }

    pub fn unit_price(&self, service_type: &str, item_name: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|p| p.service_type == service_type && p.item_name == item_name)
            .map(|p| p.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(service_type: &str, item_name: &str, price: f64, is_active: bool) -> ServicePriceDto {
        ServicePriceDto {
            service_type: service_type.to_string(),
            item_name: item_name.to_string(),
            price,
            is_active,
            ..Default::default()
        }
    }

    fn catalog() -> PriceCatalog {
        PriceCatalog::new(vec![
            price("reguler", "Kemeja", 5000.0, true),
            price("express", "Kemeja", 8000.0, true),
            price("reguler", "Selimut", 25000.0, true),
            price("reguler", "Jas", 30000.0, false),
        ])
    }

    #[test]
    fn test_service_types_are_distinct() {
        assert_eq!(catalog().service_types(), vec!["express", "reguler"]);
    }

    #[test]
    fn test_items_for_type_skip_inactive() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .items_for("reguler")
            .iter()
            .map(|p| p.item_name.as_str())
            .collect();
        assert_eq!(names, vec!["Kemeja", "Selimut"]);
    }

    #[test]
    fn test_unit_price_depends_on_type() {
        let catalog = catalog();
        assert_eq!(catalog.unit_price("express", "Kemeja"), Some(8000.0));
        assert_eq!(catalog.unit_price("reguler", "Kemeja"), Some(5000.0));
        assert_eq!(catalog.unit_price("reguler", "Jas"), None);
    }
}
