use super::lines::ItemLine;
use super::view_model::TransactionCreateViewModel;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a001_transaction::CreateTransactionRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

/// Route entry for `/transactions/new`
#[component]
pub fn TransactionCreatePage() -> impl IntoView {
    let vm = TransactionCreateViewModel::new();
    vm.load_catalog();

    let navigate = use_navigate();
    let on_created: Rc<dyn Fn(u64)> = {
        let navigate = navigate.clone();
        Rc::new(move |id: u64| navigate(&format!("/transactions/{}", id), Default::default()))
    };

    let form = vm.form;
    let lines = vm.lines;
    let catalog = vm.catalog;
    let error = vm.error;
    let is_saving = vm.is_saving;

    type Getter = fn(&CreateTransactionRequest) -> String;
    type Setter = fn(&mut CreateTransactionRequest, String);
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

    let service_type_options = move || {
        catalog
            .with(|c| c.service_types())
            .into_iter()
            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
            .collect_view()
    };

    let line_row = move |key: u64| {
        let line_field = move |f: fn(&ItemLine) -> String| {
            move || lines.with(|l| l.get(key).map(f).unwrap_or_default())
        };
        let item_options = move || {
            let service_type = lines.with(|l| l.get(key).map(|x| x.service_type.clone()).unwrap_or_default());
            catalog.with(|c| {
                c.items_for(&service_type)
                    .into_iter()
                    .map(|p| {
                        let name = p.item_name.clone();
                        let label = format!("{} ({})", p.item_name, format_rupiah(p.price));
                        view! { <option value=name>{label}</option> }
                    })
                    .collect_view()
            })
        };
        let subtotal = move || {
            catalog.with(|c| lines.with(|l| l.subtotal(key, c)))
                .map(format_rupiah)
                .unwrap_or_else(|| "-".to_string())
        };

        view! {
            <div class="item-line">
                <select
                    class="form-select"
                    prop:value=line_field(|l| l.service_type.clone())
                    on:change=move |ev| lines.update(|l| l.set_service_type(key, event_target_value(&ev)))
                >
                    <option value="">"Service type"</option>
                    {service_type_options}
                </select>
                <select
                    class="form-select"
                    prop:value=line_field(|l| l.item_name.clone())
                    on:change=move |ev| lines.update(|l| l.set_item(key, event_target_value(&ev)))
                >
                    <option value="">"Item"</option>
                    {item_options}
                </select>
                <input
                    type="number"
                    min="1"
                    class="item-line__quantity"
                    prop:value=line_field(|l| l.quantity.to_string())
                    on:input=move |ev| {
                        let quantity = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                        lines.update(|l| l.set_quantity(key, quantity));
                    }
                />
                <span class="item-line__subtotal">{subtotal}</span>
                <button class="btn btn-secondary" on:click=move |_| lines.update(|l| l.remove(key))>
                    "Remove"
                </button>
            </div>
        }
    };

    let total = {
        let vm = vm.clone();
        move || format_rupiah(vm.total())
    };
    let can_submit = {
        let vm = vm.clone();
        move || vm.is_form_valid() && !is_saving.get()
    };
    let on_save = {
        let vm = vm.clone();
        move |_| vm.save_command(on_created.clone())
    };

    view! {
        <div class="page transaction-create">
            <div class="page__header">
                <h1 class="page__title">"New transaction"</h1>
                <a href="/transactions">"Back"</a>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="details-form">
                {text_field("customer_name", "Customer name", |f| f.customer_name.clone(), |f, v| f.customer_name = v)}
                {text_field("customer_phone", "Phone", |f| f.customer_phone.clone(), |f, v| f.customer_phone = v)}
                {text_field("customer_address", "Address", |f| f.customer_address.clone(), |f, v| f.customer_address = v)}
                <div class="form-group">
                    <label for="pickup_date">"Pickup date"</label>
                    <input
                        type="date"
                        id="pickup_date"
                        prop:value=move || form.with(|f| f.pickup_date.clone())
                        on:input=move |ev| form.update(|f| f.pickup_date = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="notes">"Notes"</label>
                    <textarea
                        id="notes"
                        rows="3"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    />
                </div>
            </div>

            <h3>"Items"</h3>
            <div class="item-lines">
                <For
                    each=move || lines.with(|l| l.lines().iter().map(|x| x.key).collect::<Vec<_>>())
                    key=|key| *key
                    children=move |key| line_row(key)
                />
            </div>
            <button class="btn btn-secondary" on:click=move |_| { lines.update(|l| { l.add(); }); }>
                "Add item"
            </button>

            <div class="item-lines__total">"Total: " {total}</div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=on_save disabled=move || !can_submit()>
                    "Create transaction"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| navigate("/transactions", Default::default())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
