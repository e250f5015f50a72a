use super::lines::OrderLines;
use crate::domain::a001_transaction::api;
use crate::domain::a002_service_price::api as price_api;
use contracts::domain::a001_transaction::CreateTransactionRequest;
use contracts::domain::a002_service_price::PriceCatalog;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the new transaction form
#[derive(Clone)]
pub struct TransactionCreateViewModel {
    /// Customer fields; items and total are filled from `lines` on save
    pub form: RwSignal<CreateTransactionRequest>,
    pub lines: RwSignal<OrderLines>,
    pub catalog: RwSignal<PriceCatalog>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl TransactionCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CreateTransactionRequest::default()),
            lines: RwSignal::new(OrderLines::default()),
            catalog: RwSignal::new(PriceCatalog::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    /// Prices drive the type and item pickers
    pub fn load_catalog(&self) {
        let catalog = self.catalog;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match price_api::fetch_service_prices().await {
                Ok(prices) => {
                    let loaded = PriceCatalog::new(prices);
                    if loaded.is_empty() {
                        error.set(Some(
                            "No active service prices; add prices before registering orders"
                                .to_string(),
                        ));
                    }
                    catalog.set(loaded);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Request as it would be sent now
    pub fn request(&self) -> CreateTransactionRequest {
        let items = self
            .catalog
            .with(|catalog| self.lines.with(|lines| lines.priced(catalog)));
        self.form.get().with_items(items)
    }

    pub fn total(&self) -> f64 {
        self.catalog
            .with(|catalog| self.lines.with(|lines| lines.total(catalog)))
    }

    pub fn is_form_valid(&self) -> bool {
        self.request().validate().is_ok()
    }

    /// Send the order; `on_created` receives the new transaction id
    pub fn save_command(&self, on_created: Rc<dyn Fn(u64)>) {
        let request = untrack(|| self.request());
        if let Err(e) = request.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::create_transaction(&request).await;
            is_saving.set(false);
            match result {
                Ok(created) => {
                    log::info!(
                        "transaction {} created for {}",
                        created.transaction_code,
                        request.customer_name
                    );
                    (on_created)(created.id)
                }
                Err(e) => {
                    log::warn!("{}", e);
                    error.set(Some(e));
                }
            }
        });
    }
}

impl Default for TransactionCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_service_price::ServicePriceDto;

    #[test]
    fn test_request_built_from_lines_and_catalog() {
        let owner = Owner::new();
        owner.set();

        let vm = TransactionCreateViewModel::new();
        vm.catalog.set(PriceCatalog::new(vec![ServicePriceDto {
            service_type: "reguler".to_string(),
            item_name: "Kemeja".to_string(),
            price: 5000.0,
            ..Default::default()
        }]));
        vm.form.update(|f| {
            f.customer_name = "Budi".to_string();
            f.customer_phone = "08123".to_string();
        });
        assert!(!vm.is_form_valid());

        vm.lines.update(|lines| {
            let key = lines.lines()[0].key;
            lines.set_service_type(key, "reguler".to_string());
            lines.set_item(key, "Kemeja".to_string());
            lines.set_quantity(key, 2);
        });

        let request = vm.request();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.total_price, 10000.0);
        assert_eq!(vm.total(), 10000.0);
        assert!(vm.is_form_valid());
    }
}
