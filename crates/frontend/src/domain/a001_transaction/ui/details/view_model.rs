use crate::domain::a001_transaction::api;
use crate::domain::a001_transaction::presenter::{AutoRefresh, OrderStatusPresenter, StatusAnchors};
use contracts::domain::a001_transaction::{
    OrderSnapshot, OrderStatus, TransactionDetailDto, UpdateStatusRequest,
};
use leptos::prelude::*;

/// ViewModel for the admin transaction detail page
#[derive(Clone)]
pub struct TransactionDetailsViewModel {
    pub id: u64,
    pub transaction: RwSignal<Option<TransactionDetailDto>>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    /// Wire code of the status picked in the update form, empty when none
    pub new_status: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub is_saving: RwSignal<bool>,
    presenter: OrderStatusPresenter,
    refresh: AutoRefresh,
}

impl TransactionDetailsViewModel {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            transaction: RwSignal::new(None),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            new_status: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
            is_saving: RwSignal::new(false),
            presenter: OrderStatusPresenter::new(StatusAnchors::details()),
            refresh: AutoRefresh::default(),
        }
    }

    pub fn anchors(&self) -> StatusAnchors {
        self.presenter.anchors().clone()
    }

    /// First load plus periodic refresh while the page is open
    pub fn start(&self) {
        self.load(false);
        let this = self.clone();
        self.refresh.start(move || this.load(true));
    }

    pub fn dispose(&self) {
        self.refresh.stop();
        self.presenter.cancel_pending();
    }

    /// Fetch and render; only the most recently started load is applied
    pub fn load(&self, silent: bool) {
        let id = self.id;
        let ticket = self.presenter.begin_render();
        let presenter = self.presenter.clone();
        let refresh = self.refresh.clone();
        let transaction = self.transaction;
        let error = self.error;
        let is_loading = self.is_loading;

        if !silent {
            is_loading.set(true);
        }

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_transaction(id).await;

            if !ticket.is_current() {
                log::debug!("transaction {}: stale response #{} discarded", id, ticket.id());
                return;
            }
            is_loading.set(false);

            match result {
                Ok(dto) => {
                    let snapshot = OrderSnapshot::from(&dto);
                    if OrderStatus::raw_is_terminal(&snapshot.status) {
                        refresh.stop();
                    }
                    transaction.set(Some(dto));
                    error.set(None);
                    presenter.present(&ticket, &snapshot);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    error.set(Some(e));
                }
            }
        });
    }

    /// Completed transactions accept no further status changes
    pub fn is_status_final(&self) -> bool {
        self.transaction
            .with(|t| t.as_ref().is_some_and(|t| OrderStatus::raw_is_terminal(&t.status)))
    }

    pub fn is_form_valid(&self) -> bool {
        !self.is_status_final()
            && OrderStatus::normalize(&self.new_status.get()).is_ok()
            && !self.reason.get().trim().is_empty()
    }

    /// Ask the backend to move the transaction to the selected status.
    /// The backend decides whether the transition is allowed.
    pub fn update_status_command(&self) {
        let new_status = match OrderStatus::normalize(&self.new_status.get_untracked()) {
            Ok(status) => status,
            Err(_) => {
                self.error.set(Some("Select a valid status".to_string()));
                return;
            }
        };
        let reason = self.reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            self.error
                .set(Some("A reason for the status change is required".to_string()));
            return;
        }

        let request = UpdateStatusRequest { new_status, reason };
        let this = self.clone();
        self.is_saving.set(true);
        self.error.set(None);
        self.notice.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(this.id, &request).await {
                Ok(()) => {
                    log::info!("transaction {} moved to {}", this.id, request.new_status);
                    this.notice
                        .set(Some(format!("Status changed to {}", request.new_status)));
                    this.new_status.set(String::new());
                    this.reason.set(String::new());
                    this.load(false);
                }
                Err(e) => {
                    log::warn!("{}", e);
                    this.error.set(Some(e));
                }
            }
            this.is_saving.set(false);
        });
    }

    /// Delete after a browser confirmation, then hand control back to the page
    pub fn delete_command(&self, on_deleted: impl Fn() + 'static) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this transaction?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_transaction(this.id).await {
                Ok(()) => {
                    log::info!("transaction {} deleted", this.id);
                    this.dispose();
                    on_deleted();
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm_with_status(status: &str) -> TransactionDetailsViewModel {
        let vm = TransactionDetailsViewModel::new(7);
        vm.transaction.set(Some(TransactionDetailDto {
            id: 7,
            status: status.to_string(),
            ..Default::default()
        }));
        vm.new_status.set("selesai".to_string());
        vm.reason.set("Picked up".to_string());
        vm
    }

    #[test]
    fn test_status_form_closed_once_complete() {
        let owner = Owner::new();
        owner.set();

        let open = vm_with_status("siap_diambil");
        assert!(!open.is_status_final());
        assert!(open.is_form_valid());

        let done = vm_with_status("selesai");
        assert!(done.is_status_final());
        assert!(!done.is_form_valid());
    }
}
