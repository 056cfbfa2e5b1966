use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_app_context, Page};
use crate::system::auth::{api, context::apply_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let ctx = use_app_context();
    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    apply_login(set_auth_state, response);
                    set_is_loading.set(false);
                    ctx.navigate(Page::Home);
                }
                Err(_) => {
                    set_error_message.set(Some("Invalid username and/or password.".to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Log In"</h2>

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
                            prop:value=move || username.get()
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
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="login-hint">
                    "No account yet? Head to the register page and pick a role."
                </p>
            </div>
        </div>
    }
}
