//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the signed-in admin
//! and the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Laundry Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || {
                            let name = auth_state.get().admin_name;
                            if name.is_empty() { "Admin".to_string() } else { name }
                        }}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
