use super::view_model::TrackingViewModel;
use crate::domain::a001_transaction::ui::status_widgets::StatusWidgets;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_rupiah;
use contracts::domain::a001_transaction::TrackingDto;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TrackingPage() -> impl IntoView {
    let vm = TrackingViewModel::new();

    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    let tracking = vm.tracking;
    let field = move |f: fn(&TrackingDto) -> String| {
        move || tracking.with(|t| t.as_ref().map(f).unwrap_or_default())
    };

    let on_track = {
        let vm = vm.clone();
        move |_| vm.track_command()
    };

    view! {
        <div class="page tracking-page">
            <div class="page__header">
                <h1 class="page__title">"Track your laundry"</h1>
            </div>

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=vm.code placeholder="e.g. CHRN-20251201-ABC12" />
                <Button appearance=ButtonAppearance::Primary on_click=on_track>
                    "Track"
                </Button>
                <Show when=move || vm.is_loading.get()>
                    <Spinner />
                </Show>
            </Flex>

            <Show when=move || vm.error.get().is_some()>
                <div class="error">{move || vm.error.get().unwrap_or_default()}</div>
            </Show>

            <div class="tracking-result" class:d-none=move || tracking.with(|t| t.is_none())>
                <div class="details-grid">
                    <div class="details-grid__label">"Invoice"</div>
                    <div>{field(|t| t.transaction_code.clone())}</div>
                    <div class="details-grid__label">"Customer"</div>
                    <div>{field(|t| t.customer_name.clone())}</div>
                    <div class="details-grid__label">"Items"</div>
                    <div>{field(|t| format!("{} item(s)", t.items_count))}</div>
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
                </div>

                <StatusWidgets anchors=vm.anchors() />
            </div>
        </div>
    }
}
