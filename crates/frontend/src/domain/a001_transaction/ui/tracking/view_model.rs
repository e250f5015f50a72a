use crate::domain::a001_transaction::api;
use crate::domain::a001_transaction::presenter::{AutoRefresh, OrderStatusPresenter, StatusAnchors};
use contracts::domain::a001_transaction::{OrderSnapshot, OrderStatus, TrackingDto};
use leptos::prelude::*;

/// ViewModel for the public tracking page
#[derive(Clone)]
pub struct TrackingViewModel {
    pub code: RwSignal<String>,
    pub tracking: RwSignal<Option<TrackingDto>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    presenter: OrderStatusPresenter,
    refresh: AutoRefresh,
}

impl TrackingViewModel {
    pub fn new() -> Self {
        Self {
            code: RwSignal::new(String::new()),
            tracking: RwSignal::new(None),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            presenter: OrderStatusPresenter::new(StatusAnchors::tracking()),
            refresh: AutoRefresh::default(),
        }
    }

    pub fn anchors(&self) -> StatusAnchors {
        self.presenter.anchors().clone()
    }

    /// Track the code currently typed in; refreshes periodically while shown
    pub fn track_command(&self) {
        let code = self.code.get_untracked().trim().to_string();
        self.refresh.stop();
        self.error.set(None);

        if code.is_empty() {
            // A load for the previous code must not render under the validation error
            self.presenter.cancel_pending();
            self.is_loading.set(false);
            self.error
                .set(Some("Transaction code must not be empty.".to_string()));
            return;
        }

        self.load(code.clone(), false);

        let this = self.clone();
        self.refresh.start(move || this.load(code.clone(), true));
    }

    /// Fetch and render. A response that arrives after a newer request was
    /// started is dropped without touching the page.
    fn load(&self, code: String, silent: bool) {
        let ticket = self.presenter.begin_render();
        let presenter = self.presenter.clone();
        let refresh = self.refresh.clone();
        let tracking = self.tracking;
        let error = self.error;
        let is_loading = self.is_loading;

        if !silent {
            is_loading.set(true);
        }

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::track(&code).await;

            if !ticket.is_current() {
                log::debug!("tracking {}: stale response #{} discarded", code, ticket.id());
                return;
            }
            is_loading.set(false);

            match result {
                Ok(dto) => {
                    let snapshot = OrderSnapshot::from(&dto);
                    if OrderStatus::raw_is_terminal(&snapshot.status) {
                        refresh.stop();
                    }
                    tracking.set(Some(dto));
                    error.set(None);
                    presenter.present(&ticket, &snapshot);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    if !silent {
                        tracking.set(None);
                        refresh.stop();
                    }
                    error.set(Some(e));
                }
            }
        });
    }

    /// Stop refreshing and drop in-flight renders
    pub fn dispose(&self) {
        self.refresh.stop();
        self.presenter.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_cancels_in_flight_load() {
        let owner = Owner::new();
        owner.set();

        let vm = TrackingViewModel::new();
        let previous = vm.presenter.begin_render();
        vm.is_loading.set(true);

        vm.code.set("   ".to_string());
        vm.track_command();

        assert!(!previous.is_current());
        assert!(!vm.is_loading.get_untracked());
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Transaction code must not be empty.")
        );
    }
}
