use crate::dashboards::d400_status_summary::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::request_sequence::RequestSequence;
use contracts::dashboards::d400_status_summary::StatusSummaryResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Admin landing page: how many orders sit in each stage
#[component]
pub fn StatusSummaryDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<StatusSummaryResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let requests = StoredValue::new(RequestSequence::new());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let ticket = requests.with_value(|r| r.issue());

        spawn_local(async move {
            let result = api::get_status_summary().await;
            // A Refresh clicked mid-load owns the spinner and the counts now
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("Failed to load status summary: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    // Pipeline order; before the first response every card shows a placeholder
    let cards = move || {
        let summary = data.get();
        let loaded = summary.is_some();
        summary
            .unwrap_or_default()
            .rows()
            .into_iter()
            .map(|(status, count)| {
                view! {
                    <StatCard
                        label=status.label().to_string()
                        icon_name=status.key().to_string()
                        value=Signal::derive(move || loaded.then_some(count))
                        variant=status.key().to_string()
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
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

            <div class="stat-grid">
                <StatCard
                    label="All transactions".to_string()
                    icon_name="orders".to_string()
                    value=Signal::derive(move || data.get().map(|d| d.total))
                />
                {cards}
            </div>

            <a href="/transactions">"Open transaction list"</a>
        </div>
    }
}
