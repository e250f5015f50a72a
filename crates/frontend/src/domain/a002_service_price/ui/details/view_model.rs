use crate::domain::a002_service_price::api;
use contracts::domain::a002_service_price::{
    CreateServicePriceRequest, ServicePriceDto, UpdateServicePriceRequest,
};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the service price form
#[derive(Clone)]
pub struct ServicePriceDetailsViewModel {
    pub form: RwSignal<ServicePriceDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl ServicePriceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ServicePriceDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        !self.form.with(ServicePriceDto::is_new)
    }

    pub fn is_form_valid(&self) -> bool {
        self.form
            .with(|f| CreateServicePriceRequest::from(f).validate().is_ok())
    }

    /// Load the stored price when editing
    pub fn load_if_needed(&self, id: Option<u64>) {
        if let Some(id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_service_price(id).await {
                    Ok(dto) => form.set(dto),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    }

    /// Create or update, depending on whether the form holds a stored price
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get_untracked();
        let validation = if current.is_new() {
            CreateServicePriceRequest::from(&current).validate()
        } else {
            UpdateServicePriceRequest::from(&current).validate()
        };
        if let Err(e) = validation {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = if current.is_new() {
                api::create_service_price(&CreateServicePriceRequest::from(&current)).await
            } else {
                api::update_service_price(current.id, &UpdateServicePriceRequest::from(&current))
                    .await
            };
            is_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!(
                        "service price saved: {} / {}",
                        current.service_type,
                        current.item_name
                    );
                    (on_saved)(())
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Flip the active flag right away, outside of the form save
    pub fn toggle_active_command(&self) {
        let (id, active) = self.form.with_untracked(|f| (f.id, f.is_active));
        if id == 0 {
            return;
        }
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::set_service_price_active(id, !active).await {
                Ok(()) => form.update(|f| f.is_active = !active),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

impl Default for ServicePriceDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_and_validity_follow_form() {
        let owner = Owner::new();
        owner.set();

        let vm = ServicePriceDetailsViewModel::new();
        assert!(!vm.is_edit_mode());
        assert!(!vm.is_form_valid());

        vm.form.update(|f| {
            f.service_type = "express".to_string();
            f.item_name = "Kemeja".to_string();
            f.price = 8000.0;
        });
        assert!(vm.is_form_valid());

        vm.form.update(|f| f.id = 12);
        assert!(vm.is_edit_mode());
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let owner = Owner::new();
        owner.set();

        let vm = ServicePriceDetailsViewModel::new();
        vm.form.update(|f| f.item_name = "Kemeja".to_string());
        vm.save_command(Rc::new(|_: ()| panic!("must not save")));
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Service type is required")
        );
        assert!(!vm.is_saving.get_untracked());
    }
}
