use super::view_model::ServicePriceDetailsViewModel;
use crate::shared::route_params::route_id;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

/// Back to the list after save or cancel
fn back_to_list() -> Rc<dyn Fn(())> {
    let navigate = use_navigate();
    Rc::new(move |_: ()| navigate("/service-prices", Default::default()))
}

/// Route entry for `/service-prices/new`
#[component]
pub fn ServicePriceCreatePage() -> impl IntoView {
    view! {
        <div class="page">
            <ServicePriceDetails id=None on_saved=back_to_list() on_cancel=back_to_list() />
        </div>
    }
}

/// Route entry for `/service-prices/:id`
#[component]
pub fn ServicePriceDetailsPage() -> impl IntoView {
    let id = route_id(use_params_map(), "id");

    move || match id.get() {
        Some(id) => view! {
            <div class="page">
                <ServicePriceDetails id=Some(id) on_saved=back_to_list() on_cancel=back_to_list() />
            </div>
        }
        .into_any(),
        None => view! {
            <div class="page">
                <div class="error">"Invalid service price id"</div>
                <a href="/service-prices">"Back to service prices"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn ServicePriceDetails(
    id: Option<u64>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ServicePriceDetailsViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();
    let vm_show = vm.clone();

    view! {
        <div class="details-container service-price-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode() { "Edit service price" } else { "New service price" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="service_type">"Service type"</label>
                    <input
                        type="text"
                        id="service_type"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().service_type
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.service_type = event_target_value(&ev))
                        }
                        placeholder="reguler, express"
                    />
                </div>

                <div class="form-group">
                    <label for="item_name">"Item"</label>
                    <input
                        type="text"
                        id="item_name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().item_name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.item_name = event_target_value(&ev))
                        }
                        placeholder="Kemeja, Celana, Selimut"
                    />
                </div>

                <div class="form-group">
                    <label for="price">"Price (Rp)"</label>
                    <input
                        type="number"
                        id="price"
                        min="0"
                        step="500"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().price.to_string()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let price = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                                vm.form.update(|f| f.price = price);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        }
                        rows="3"
                    />
                </div>

                <Show when={
                    let vm = vm_clone.clone();
                    move || vm.is_edit_mode()
                }>
                    <div class="form-group">
                        <label>"State"</label>
                        <div>
                            {
                                let vm = vm_show.clone();
                                move || if vm.form.get().is_active { "Active" } else { "Inactive" }
                            }
                            " "
                            <button
                                class="btn btn-secondary"
                                on:click={
                                    let vm = vm_show.clone();
                                    move |_| vm.toggle_active_command()
                                }
                            >
                                {
                                    let vm = vm_show.clone();
                                    move || if vm.form.get().is_active { "Deactivate" } else { "Activate" }
                                }
                            </button>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid() || vm.is_saving.get()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode() { "Save" } else { "Create" }
                    }
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
