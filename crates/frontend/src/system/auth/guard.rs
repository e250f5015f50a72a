use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Component that requires authentication.
/// Redirects to the login page when there is no session token.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
