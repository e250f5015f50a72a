use crate::shared::request_sequence::{RequestSequence, RequestTicket};
use contracts::domain::a002_service_price::ServicePriceDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ServicePriceListState {
    pub items: Vec<ServicePriceDto>,
    /// Empty shows every service type
    pub type_filter: String,
    pub is_loaded: bool,
    pub requests: RequestSequence,
}

impl ServicePriceListState {
    pub fn begin_load(&self) -> RequestTicket {
        self.requests.issue()
    }

    /// Store a loaded list unless a newer load has started; sorted by type, then item
    pub fn apply_items_if_current(&mut self, ticket: &RequestTicket, mut items: Vec<ServicePriceDto>) -> bool {
        if !ticket.is_current() {
            return false;
        }
        items.sort_by(|a, b| {
            a.service_type
                .cmp(&b.service_type)
                .then_with(|| a.item_name.cmp(&b.item_name))
        });
        // A filter on a type that disappeared would hide everything
        if !self.type_filter.is_empty() && !items.iter().any(|p| p.service_type == self.type_filter) {
            self.type_filter.clear();
        }
        self.items = items;
        self.is_loaded = true;
        true
    }

    pub fn service_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.items.iter().map(|p| p.service_type.clone()).collect();
        types.dedup();
        types
    }

    pub fn visible(&self) -> Vec<ServicePriceDto> {
        self.items
            .iter()
            .filter(|p| self.type_filter.is_empty() || p.service_type == self.type_filter)
            .cloned()
            .collect()
    }
}

pub fn create_state() -> RwSignal<ServicePriceListState> {
    RwSignal::new(ServicePriceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(id: u64, service_type: &str, item_name: &str) -> ServicePriceDto {
        ServicePriceDto {
            id,
            service_type: service_type.to_string(),
            item_name: item_name.to_string(),
            price: 5000.0,
            ..Default::default()
        }
    }

    fn sample() -> Vec<ServicePriceDto> {
        vec![
            price(1, "reguler", "Selimut"),
            price(2, "express", "Kemeja"),
            price(3, "reguler", "Kemeja"),
        ]
    }

    #[test]
    fn test_items_sorted_and_grouped_by_type() {
        let mut state = ServicePriceListState::default();
        let ticket = state.begin_load();
        assert!(state.apply_items_if_current(&ticket, sample()));

        let ids: Vec<u64> = state.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(state.service_types(), vec!["express", "reguler"]);
    }

    #[test]
    fn test_type_filter() {
        let mut state = ServicePriceListState::default();
        let ticket = state.begin_load();
        state.apply_items_if_current(&ticket, sample());

        state.type_filter = "reguler".to_string();
        assert_eq!(state.visible().len(), 2);

        let reload = state.begin_load();
        state.apply_items_if_current(&reload, vec![price(2, "express", "Kemeja")]);
        assert!(state.type_filter.is_empty());
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn test_stale_list_dropped() {
        let mut state = ServicePriceListState::default();
        let before_delete = state.begin_load();
        let after_delete = state.begin_load();

        assert!(state.apply_items_if_current(&after_delete, vec![price(2, "express", "Kemeja")]));
        assert!(!state.apply_items_if_current(&before_delete, sample()));
        assert_eq!(state.items.len(), 1);
    }
}
