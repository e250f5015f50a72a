use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev/next pagination for backend-paged lists
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed, as the backend counts)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
