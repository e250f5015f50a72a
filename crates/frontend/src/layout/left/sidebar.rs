//! Sidebar navigation for the admin area

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            href: "/",
            label: "Dashboard",
            icon: "dashboard",
        },
        MenuItem {
            href: "/transactions",
            label: "Transactions",
            icon: "orders",
        },
        MenuItem {
            href: "/service-prices",
            label: "Service prices",
            icon: "tag",
        },
        MenuItem {
            href: "/track",
            label: "Track order",
            icon: "search",
        },
    ]
}

/// `/` only matches itself; other items also match their sub-pages
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{}/", href))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="app-sidebar__content">
            {get_menu_items()
                .into_iter()
                .map(|item| {
                    let href = item.href;
                    view! {
                        <a
                            href=href
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                location.pathname.with(|p| is_active(href, p))
                            }
                        >
                            <span class="app-sidebar__icon">{icon(item.icon)}</span>
                            <span class="app-sidebar__label">{item.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
