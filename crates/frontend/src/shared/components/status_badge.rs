use contracts::domain::a001_transaction::badge_for_raw;
use leptos::prelude::*;

/// Badge for a raw status value as it comes from the backend.
/// Unknown values are shown as-is.
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    let badge = Memo::new(move |_| badge_for_raw(&status.get()));

    view! {
        <span class=move || badge.get().css_class()>
            {move || badge.get().label}
        </span>
    }
}
