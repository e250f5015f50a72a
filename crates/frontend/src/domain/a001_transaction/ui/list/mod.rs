pub mod state;

use self::state::create_state;
use crate::domain::a001_transaction::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_millis;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a001_transaction::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn TransactionList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let navigate = use_navigate();

    let load_transactions = move || {
        let (query, ticket) = state.with_untracked(|s| (s.query.clone(), s.begin_load()));
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let result = api::fetch_transactions(&query).await;
            if !ticket.is_current() {
                log::debug!("Dropping stale transaction page {}", query.page);
                return;
            }
            match result {
                Ok(page) => {
                    state.update(|s| {
                        s.apply_page_if_current(&ticket, page);
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
            load_transactions();
        }
    });

    let go_to_page = move |page: u32| {
        state.update(|s| s.go_to_page(page));
        load_transactions();
    };

    let change_filter = move |raw: String| {
        let status = OrderStatus::normalize(&raw).ok();
        state.update(|s| s.set_status_filter(status));
        load_transactions();
    };

    let delete_transaction = move |id: u64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this transaction?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_transaction(id).await {
                Ok(()) => load_transactions(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let status_options = OrderStatus::PIPELINE
        .iter()
        .map(|status| {
            view! { <option value=status.wire_code()>{status.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="page transaction-list">
            <div class="page__header">
                <h1 class="page__title">"Transactions"</h1>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <select
                        class="form-select"
                        prop:value=move || {
                            state.with(|s| {
                                s.query.status.map(|st| st.wire_code().to_string()).unwrap_or_default()
                            })
                        }
                        on:change=move |ev| change_filter(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {status_options}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate("/transactions/new", Default::default())
                    >
                        "New transaction"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_transactions()>
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
                        <TableHeaderCell>"Code"</TableHeaderCell>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>"Paid"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        state
                            .with(|s| s.items.clone())
                            .into_iter()
                            .map(|t| {
                                let id = t.id;
                                let href = format!("/transactions/{}", id);
                                let status = t.status.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <a href=href>{t.transaction_code}</a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{t.customer_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=status />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_rupiah(t.total_price)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{if t.is_paid { "Yes" } else { "No" }}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_millis(t.created_at)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_transaction(id)
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
                <p class="text-muted">"No transactions found."</p>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.query.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                on_page_change=Callback::new(go_to_page)
            />
        </div>
    }
}
