use crate::shared::icons::icon;
use crate::shared::number_format::format_number_with_decimals;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Count to show (None = loading/error)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Extra modifier, e.g. the status key
    #[prop(optional, into)]
    variant: Option<String>,
) -> impl IntoView {
    let class = match variant {
        Some(v) => format!("stat-card stat-card--{}", v),
        None => "stat-card".to_string(),
    };

    let formatted = move || match value.get() {
        Some(v) => format_number_with_decimals(v as f64, 0),
        None => "-".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
