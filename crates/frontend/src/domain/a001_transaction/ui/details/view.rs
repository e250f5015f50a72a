use super::view_model::TransactionDetailsViewModel;
use crate::domain::a001_transaction::ui::status_widgets::StatusWidgets;
use crate::shared::date_utils::{format_date, format_millis};
use crate::shared::number_format::format_rupiah;
use crate::shared::route_params::route_id;
use contracts::domain::a001_transaction::{OrderStatus, TransactionDetailDto};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

/// Route entry for `/transactions/:id`
#[component]
pub fn TransactionDetailsPage() -> impl IntoView {
    let id = route_id(use_params_map(), "id");

    // Keyed on the id: moving to another transaction builds a fresh view model
    move || match id.get() {
        Some(id) => view! { <TransactionDetails id=id /> }.into_any(),
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
pub fn TransactionDetails(id: u64) -> impl IntoView {
    let vm = TransactionDetailsViewModel::new(id);
    let navigate = use_navigate();

    // Widgets must be in the document before the first render lands
    {
        let vm = vm.clone();
        Effect::new(move |_| vm.start());
    }
    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    let transaction = vm.transaction;
    let is_loading = vm.is_loading;
    let error = vm.error;
    let notice = vm.notice;
    let new_status = vm.new_status;
    let field = move |f: fn(&TransactionDetailDto) -> String| {
        move || transaction.with(|t| t.as_ref().map(f).unwrap_or_default())
    };

    let on_update = {
        let vm = vm.clone();
        move |_| vm.update_status_command()
    };
    let on_delete = {
        let vm = vm.clone();
        move |_| {
            let navigate = navigate.clone();
            vm.delete_command(move || navigate("/transactions", Default::default()));
        }
    };
    let can_submit = {
        let vm = vm.clone();
        move || vm.is_form_valid() && !vm.is_saving.get()
    };
    let is_final = {
        let vm = vm.clone();
        move || vm.is_status_final()
    };

    let status_options = OrderStatus::PIPELINE
        .iter()
        .map(|status| {
            view! { <option value=status.wire_code()>{status.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="page transaction-details">
            <div class="page__header">
                <h1 class="page__title">{field(|t| t.transaction_code.clone())}</h1>
                <Flex gap=FlexGap::Small>
                    <Show when=move || is_loading.get()>
                        <Spinner />
                    </Show>
                    <a href="/transactions">"Back"</a>
                    <a href=format!("/transactions/{}/edit", id)>"Edit"</a>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_delete>
                        "Delete"
                    </Button>
                </Flex>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || notice.get().is_some()>
                <div class="notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <div class="details-grid">
                <div class="details-grid__label">"Customer"</div>
                <div>{field(|t| t.customer_name.clone())}</div>
                <div class="details-grid__label">"Phone"</div>
                <div>{field(|t| t.customer_phone.clone())}</div>
                <div class="details-grid__label">"Address"</div>
                <div>{field(|t| t.customer_address.clone())}</div>
                <div class="details-grid__label">"Notes"</div>
                <div>{field(|t| if t.notes.is_empty() { "-".to_string() } else { t.notes.clone() })}</div>
                <div class="details-grid__label">"Total"</div>
                <div>{field(|t| format_rupiah(t.total_price))}</div>
                <div class="details-grid__label">"Paid"</div>
                <div>{field(|t| if t.is_paid { "Yes".to_string() } else { "Not yet".to_string() })}</div>
                <div class="details-grid__label">"Pickup date"</div>
                <div>
                    {field(|t| {
                        t.pickup_date()
                            .map(|d| format_date(&d))
                            .unwrap_or_else(|| "-".to_string())
                    })}
                </div>
                <div class="details-grid__label">"Created"</div>
                <div>{field(|t| format_millis(t.created_at))}</div>
            </div>

            <h3>"Items"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Service"</TableHeaderCell>
                        <TableHeaderCell>"Item"</TableHeaderCell>
                        <TableHeaderCell>"Qty"</TableHeaderCell>
                        <TableHeaderCell>"Unit price"</TableHeaderCell>
                        <TableHeaderCell>"Subtotal"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        transaction
                            .with(|t| t.as_ref().map(|t| t.items.clone()).unwrap_or_default())
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{item.service_type}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{item.item_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{item.quantity}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_rupiah(item.unit_price)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_rupiah(item.subtotal)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <StatusWidgets anchors=vm.anchors() />

            <div class="status-update">
                <h3>"Change status"</h3>
                <Show when=is_final>
                    <p class="text-muted">"This transaction is complete; its status can no longer change."</p>
                </Show>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <select
                        class="form-select"
                        prop:value=move || new_status.get()
                        on:change=move |ev| new_status.set(event_target_value(&ev))
                    >
                        <option value="">"Select status"</option>
                        {status_options}
                    </select>
                    <Input value=vm.reason placeholder="Reason for the change" />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_update
                        disabled=move || !can_submit()
                    >
                        "Update status"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
