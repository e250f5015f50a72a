use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get().trim().to_string();
        let password_val = password.get().trim().to_string();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(set_auth_state, username_val, password_val).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("{}", e);
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Laundry Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Login" }}
                    </button>
                </form>

                <div class="login-info">
                    <a href="/track">"Track an order"</a>
                </div>
            </div>
        </div>
    }
}
