pub mod state;

use self::state::create_state;
use crate::domain::a002_service_price::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::number_format::format_rupiah;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ServicePriceList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();

    let load_prices = move || {
        let ticket = state.with_untracked(|s| s.begin_load());
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let result = api::fetch_service_prices().await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(items) => {
                    state.update(|s| {
                        s.apply_items_if_current(&ticket, items);
                    });
                }
                Err(e) => {
                    log::warn!("{}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_prices();
        }
    });

    let deactivate = move |id: u64| {
        spawn_local(async move {
            match api::set_service_price_active(id, false).await {
                Ok(()) => {
                    log::info!("service price {} deactivated", id);
                    load_prices();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let delete_price = move |id: u64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this service price?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_service_price(id).await {
                Ok(()) => load_prices(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let type_options = move || {
        state
            .with(|s| s.service_types())
            .into_iter()
            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="page service-price-list">
            <div class="page__header">
                <h1 class="page__title">"Service prices"</h1>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <select
                        class="form-select"
                        prop:value=move || state.with(|s| s.type_filter.clone())
                        on:change=move |ev| state.update(|s| s.type_filter = event_target_value(&ev))
                    >
                        <option value="">"All service types"</option>
                        {type_options}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate("/service-prices/new", Default::default())
                    >
                        "New price"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_prices()>
                        "Refresh"
                    </Button>
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                </Flex>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Service type"</TableHeaderCell>
                        <TableHeaderCell>"Item"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Updated"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        state
                            .with(|s| s.visible())
                            .into_iter()
                            .map(|p| {
                                let id = p.id;
                                let href = format!("/service-prices/{}", id);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{p.service_type}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href=href>{p.item_name}</a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if p.description.is_empty() { "-".to_string() } else { p.description }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_rupiah(p.price)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_datetime(&p.updated_at)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| deactivate(id)
                                                >
                                                    "Deactivate"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_price(id)
                                                >
                                                    "Delete"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <Show when=move || state.with(|s| s.is_loaded && s.items.is_empty())>
                <p class="text-muted">"No active service prices."</p>
            </Show>
        </div>
    }
}
