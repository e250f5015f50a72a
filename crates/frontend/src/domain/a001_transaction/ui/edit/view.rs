use super::view_model::TransactionEditViewModel;
use crate::shared::route_params::route_id;
use contracts::domain::a001_transaction::UpdateTransactionRequest;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

/// Route entry for `/transactions/:id/edit`
#[component]
pub fn TransactionEditPage() -> impl IntoView {
    let id = route_id(use_params_map(), "id");

    move || match id.get() {
        Some(id) => {
            let navigate = use_navigate();
            let back: Rc<dyn Fn(())> = Rc::new(move |_: ()| {
                navigate(&format!("/transactions/{}", id), Default::default())
            });
            view! { <TransactionEdit id=id on_saved=back.clone() on_cancel=back /> }.into_any()
        }
        None => view! {
            <div class="page">
                <div class="error">"Invalid transaction id"</div>
                <a href="/transactions">"Back to transactions"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn TransactionEdit(id: u64, on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = TransactionEditViewModel::new(id);
    vm.load();

    let form = vm.form;
    let code = vm.code;
    let error = vm.error;
    let is_loading = vm.is_loading;
    let is_saving = vm.is_saving;

    type Getter = fn(&UpdateTransactionRequest) -> String;
    type Setter = fn(&mut UpdateTransactionRequest, String);
    let text_field = move |id: &'static str, label: &'static str, get: Getter, set: Setter| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    let can_submit = {
        let vm = vm.clone();
        move || vm.is_form_valid() && !is_saving.get() && !is_loading.get()
    };
    let on_save = {
        let vm = vm.clone();
        move |_| vm.save_command(on_saved.clone())
    };

    view! {
        <div class="page transaction-edit">
            <div class="page__header">
                <h1 class="page__title">"Edit " {move || code.get()}</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="details-form">
                {text_field("customer_name", "Customer name", |f| f.customer_name.clone(), |f, v| f.customer_name = v)}
                {text_field("customer_phone", "Phone", |f| f.customer_phone.clone(), |f, v| f.customer_phone = v)}
                {text_field("customer_address", "Address", |f| f.customer_address.clone(), |f, v| f.customer_address = v)}
                <div class="form-group">
                    <label for="notes">"Notes"</label>
                    <textarea
                        id="notes"
                        rows="3"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_paid.unwrap_or(false))
                            on:change=move |ev| form.update(|f| f.is_paid = Some(event_target_checked(&ev)))
                        />
                        " Paid"
                    </label>
                </div>
                <p class="text-muted">"Items, total and pickup date cannot be changed after creation."</p>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=on_save disabled=move || !can_submit()>
                    "Save"
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
