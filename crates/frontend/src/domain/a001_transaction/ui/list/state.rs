use contracts::domain::a001_transaction::{
    OrderStatus, TransactionDetailDto, TransactionListPage, TransactionListQuery,
};
use crate::shared::request_sequence::{RequestSequence, RequestTicket};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct TransactionListState {
    pub items: Vec<TransactionDetailDto>,
    pub query: TransactionListQuery,
    pub is_loaded: bool,
    // Server-side paging
    pub total_count: u64,
    pub total_pages: u32,
    // Filter, paging, Refresh and delete all refetch; only the newest load may land
    pub requests: RequestSequence,
}

impl TransactionListState {
    pub fn apply_page(&mut self, page: TransactionListPage) {
        self.items = page.data;
        self.total_count = page.total;
        self.total_pages = page.total_pages;
        if page.page > 0 {
            self.query.page = page.page;
        }
        self.is_loaded = true;
    }

    /// Take a ticket for a load about to start, superseding earlier loads
    pub fn begin_load(&self) -> RequestTicket {
        self.requests.issue()
    }

    /// Apply a loaded page unless a newer load has started since; returns whether it landed
    pub fn apply_page_if_current(&mut self, ticket: &RequestTicket, page: TransactionListPage) -> bool {
        if !ticket.is_current() {
            return false;
        }
        self.apply_page(page);
        true
    }

    /// Changing the filter always starts from the first page
    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.query.status = status;
        self.query.page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.query.page = page.max(1);
    }
}

pub fn create_state() -> RwSignal<TransactionListState> {
    RwSignal::new(TransactionListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_resets_page() {
        let mut state = TransactionListState::default();
        state.go_to_page(4);
        assert_eq!(state.query.page, 4);

        state.set_status_filter(Some(OrderStatus::Ironing));
        assert_eq!(state.query.page, 1);
        assert_eq!(state.query.status, Some(OrderStatus::Ironing));
    }

    #[test]
    fn test_page_never_below_one() {
        let mut state = TransactionListState::default();
        state.go_to_page(0);
        assert_eq!(state.query.page, 1);
    }

    fn page_of(codes: &[&str], page: u32) -> TransactionListPage {
        let data = codes
            .iter()
            .enumerate()
            .map(|(i, code)| TransactionDetailDto {
                id: i as u64 + 1,
                status: code.to_string(),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        TransactionListPage {
            total: data.len() as u64,
            data,
            page,
            limit: 10,
            total_pages: page,
        }
    }

    #[test]
    fn test_late_page_for_old_filter_is_dropped() {
        let mut state = TransactionListState::default();

        state.set_status_filter(Some(OrderStatus::Washing));
        let washing = state.begin_load();
        state.set_status_filter(Some(OrderStatus::Complete));
        let complete = state.begin_load();

        assert!(state.apply_page_if_current(&complete, page_of(&["selesai"], 1)));
        assert!(!state.apply_page_if_current(&washing, page_of(&["mencuci"], 2)));

        assert_eq!(state.query.status, Some(OrderStatus::Complete));
        assert_eq!(state.query.page, 1);
        let statuses: Vec<&str> = state.items.iter().map(|t| t.status.as_str()).collect();
        assert_eq!(statuses, vec!["selesai"]);
    }

    #[test]
    fn test_refresh_supersedes_paging_load() {
        let mut state = TransactionListState::default();
        state.go_to_page(2);
        let paging = state.begin_load();
        let refresh = state.begin_load();

        assert!(!state.apply_page_if_current(&paging, page_of(&["antrian"], 2)));
        assert!(!state.is_loaded);
        assert!(state.apply_page_if_current(&refresh, page_of(&["antrian", "mencuci"], 2)));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_apply_page() {
        let mut state = TransactionListState::default();
        state.apply_page(TransactionListPage {
            data: Vec::new(),
            total: 25,
            page: 3,
            limit: 10,
            total_pages: 3,
        });
        assert!(state.is_loaded);
        assert_eq!(state.total_count, 25);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.query.page, 3);
        assert_eq!(state.query.limit, 10);
    }
}
