//! Item lines of a new order, priced from the service price list

use contracts::domain::a001_transaction::CreateTransactionItemRequest;
use contracts::domain::a002_service_price::PriceCatalog;

#[derive(Clone, Debug, PartialEq)]
pub struct ItemLine {
    /// Stable identity for keyed rendering
    pub key: u64,
    pub service_type: String,
    pub item_name: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderLines {
    lines: Vec<ItemLine>,
    next_key: u64,
}

impl Default for OrderLines {
    /// Starts with one empty line
    fn default() -> Self {
        let mut lines = Self {
            lines: Vec::new(),
            next_key: 1,
        };
        lines.add();
        lines
    }
}

impl OrderLines {
    pub fn lines(&self) -> &[ItemLine] {
        &self.lines
    }

    pub fn get(&self, key: u64) -> Option<&ItemLine> {
        self.lines.iter().find(|l| l.key == key)
    }

    pub fn add(&mut self) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.lines.push(ItemLine {
            key,
            service_type: String::new(),
            item_name: String::new(),
            quantity: 1,
        });
        key
    }

    /// The last line stays so the form never ends up without a row
    pub fn remove(&mut self, key: u64) {
        if self.lines.len() > 1 {
            self.lines.retain(|l| l.key != key);
        }
    }

    /// Picking another type invalidates the chosen item
    pub fn set_service_type(&mut self, key: u64, service_type: String) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            if line.service_type != service_type {
                line.item_name.clear();
            }
            line.service_type = service_type;
        }
    }

    pub fn set_item(&mut self, key: u64, item_name: String) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.item_name = item_name;
        }
    }

    pub fn set_quantity(&mut self, key: u64, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.quantity = quantity;
        }
    }

    /// Unit price times quantity, `None` until the line is complete
    pub fn subtotal(&self, key: u64, catalog: &PriceCatalog) -> Option<f64> {
        let line = self.get(key)?;
        let unit_price = catalog.unit_price(&line.service_type, &line.item_name)?;
        (line.quantity > 0).then(|| f64::from(line.quantity) * unit_price)
    }

    /// Request lines for every complete row; incomplete rows are left out
    pub fn priced(&self, catalog: &PriceCatalog) -> Vec<CreateTransactionItemRequest> {
        self.lines
            .iter()
            .filter(|l| l.quantity > 0)
            .filter_map(|l| {
                let unit_price = catalog.unit_price(&l.service_type, &l.item_name)?;
                Some(CreateTransactionItemRequest {
                    service_type: l.service_type.clone(),
                    item_name: l.item_name.clone(),
                    quantity: i32::try_from(l.quantity).ok()?,
                    unit_price,
                })
            })
            .collect()
    }

    pub fn total(&self, catalog: &PriceCatalog) -> f64 {
        self.priced(catalog)
            .iter()
            .map(CreateTransactionItemRequest::subtotal)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_service_price::ServicePriceDto;

    fn catalog() -> PriceCatalog {
        let price = |service_type: &str, item_name: &str, price: f64| ServicePriceDto {
            service_type: service_type.to_string(),
            item_name: item_name.to_string(),
            price,
            ..Default::default()
        };
        PriceCatalog::new(vec![
            price("reguler", "Kemeja", 5000.0),
            price("express", "Kemeja", 8000.0),
            price("reguler", "Selimut", 25000.0),
        ])
    }

    #[test]
    fn test_starts_with_one_line_that_cannot_be_removed() {
        let mut lines = OrderLines::default();
        assert_eq!(lines.lines().len(), 1);
        let key = lines.lines()[0].key;
        lines.remove(key);
        assert_eq!(lines.lines().len(), 1);
    }

    #[test]
    fn test_total_sums_complete_lines_only() {
        let catalog = catalog();
        let mut lines = OrderLines::default();
        let first = lines.lines()[0].key;
        lines.set_service_type(first, "reguler".to_string());
        lines.set_item(first, "Kemeja".to_string());
        lines.set_quantity(first, 3);

        let second = lines.add();
        lines.set_service_type(second, "reguler".to_string());
        lines.set_item(second, "Selimut".to_string());

        // Type chosen, item missing
        let third = lines.add();
        lines.set_service_type(third, "express".to_string());

        assert_eq!(lines.subtotal(first, &catalog), Some(15000.0));
        assert_eq!(lines.subtotal(third, &catalog), None);
        assert_eq!(lines.priced(&catalog).len(), 2);
        assert_eq!(lines.total(&catalog), 40000.0);
    }

    #[test]
    fn test_changing_type_clears_item_and_reprices() {
        let catalog = catalog();
        let mut lines = OrderLines::default();
        let key = lines.lines()[0].key;
        lines.set_service_type(key, "express".to_string());
        lines.set_item(key, "Kemeja".to_string());
        assert_eq!(lines.subtotal(key, &catalog), Some(8000.0));

        lines.set_service_type(key, "reguler".to_string());
        assert_eq!(lines.get(key).map(|l| l.item_name.as_str()), Some(""));
        assert_eq!(lines.subtotal(key, &catalog), None);
    }

    #[test]
    fn test_zero_quantity_left_out() {
        let catalog = catalog();
        let mut lines = OrderLines::default();
        let key = lines.lines()[0].key;
        lines.set_service_type(key, "reguler".to_string());
        lines.set_item(key, "Kemeja".to_string());
        lines.set_quantity(key, 0);
        assert!(lines.priced(&catalog).is_empty());
    }
}
