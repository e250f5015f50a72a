use crate::domain::a001_transaction::api;
use contracts::domain::a001_transaction::UpdateTransactionRequest;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the transaction edit form
#[derive(Clone)]
pub struct TransactionEditViewModel {
    pub id: u64,
    pub code: RwSignal<String>,
    pub form: RwSignal<UpdateTransactionRequest>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
}

impl TransactionEditViewModel {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            code: RwSignal::new(String::new()),
            form: RwSignal::new(UpdateTransactionRequest::default()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
        }
    }

    /// Prefill the form from the stored transaction
    pub fn load(&self) {
        let id = self.id;
        let code = self.code;
        let form = self.form;
        let error = self.error;
        let is_loading = self.is_loading;
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_transaction(id).await {
                Ok(dto) => {
                    code.set(dto.transaction_code.clone());
                    form.set(UpdateTransactionRequest::from(&dto));
                }
                Err(e) => error.set(Some(e)),
            }
            is_loading.set(false);
        });
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let request = self.form.get_untracked();
        if let Err(e) = request.validate() {
            self.error.set(Some(e));
            return;
        }

        let id = self.id;
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::update_transaction(id, &request).await;
            is_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("transaction {} updated", id);
                    (on_saved)(())
                }
                Err(e) => {
                    log::warn!("{}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_blocks_save() {
        let owner = Owner::new();
        owner.set();

        let vm = TransactionEditViewModel::new(3);
        vm.form.update(|f| {
            f.customer_name = "  ".to_string();
            f.customer_phone = "0812".to_string();
        });
        assert!(!vm.is_form_valid());

        vm.save_command(Rc::new(|_: ()| panic!("must not save")));
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Customer name is required")
        );

        vm.form.update(|f| f.customer_name = "Siti".to_string());
        assert!(vm.is_form_valid());
    }
}
