use crate::domain::a001_transaction::presenter::StatusAnchors;
use crate::shared::icons::icon;
use contracts::domain::a001_transaction::OrderStatus;
use leptos::prelude::*;

/// Static markup the presenter writes into.
///
/// Nothing here is reactive: after mount the presenter owns these nodes, so
/// Leptos never overwrites the classes and children it sets.
#[component]
pub fn StatusWidgets(anchors: StatusAnchors) -> impl IntoView {
    let steps = OrderStatus::PIPELINE
        .iter()
        .map(|stage| {
            view! {
                <div class="status-step" id=anchors.step_id(*stage)>
                    <div class="status-step__icon">{icon(stage.key())}</div>
                    <div class="status-step__label">{stage.label()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="status-widgets">
            <div class="status-widgets__badge">
                <span id=anchors.badge_id.clone() class="badge badge--status"></span>
            </div>

            <div class="status-steps">{steps}</div>

            <div class="status-progress">
                <div
                    id=anchors.progress_bar_id.clone()
                    class="status-progress__bar"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    style="width: 0%;"
                ></div>
            </div>

            <h3 class="status-widgets__title">"Status history"</h3>
            <div id=anchors.timeline_id.clone() class="timeline"></div>
        </div>
    }
}
