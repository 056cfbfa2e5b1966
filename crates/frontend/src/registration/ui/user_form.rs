use contracts::system::users::CreateAccountDto;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::registration::api;
use crate::system::auth::context::{apply_login, use_auth};

/// Account creation form. On success the new account is logged in and the
/// user is told to fill out one of the role forms.
#[component]
pub fn UserForm() -> impl IntoView {
    let form = RwSignal::new(CreateAccountDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let success = RwSignal::new(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = form.get();
        error.set(None);
        success.set(None);

        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register_user(&dto).await {
                Ok(response) => {
                    success.set(Some(response.message));
                    apply_login(set_auth_state, response.auth);
                }
                Err(e) => error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <h3>"Create a User account"</h3>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || success.get().map(|m| view! { <div class="success-message">{m}</div> })}

            <div class="form-group">
                <label for="register-username">"Username"</label>
                <input
                    type="text"
                    id="register-username"
                    prop:value=move || form.get().username
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="register-email">"Email"</label>
                <input
                    type="email"
                    id="register-email"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="register-first-name">"First name"</label>
                <input
                    type="text"
                    id="register-first-name"
                    prop:value=move || form.get().first_name
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="register-last-name">"Last name"</label>
                <input
                    type="text"
                    id="register-last-name"
                    prop:value=move || form.get().last_name
                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="register-password">"Password"</label>
                <input
                    type="password"
                    id="register-password"
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    required
                />
            </div>

            <div class="form-group">
                <label for="register-confirmation">"Confirm password"</label>
                <input
                    type="password"
                    id="register-confirmation"
                    prop:value=move || form.get().confirmation
                    on:input=move |ev| form.update(|f| f.confirmation = event_target_value(&ev))
                    required
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Creating..." } else { "Create account" }}
            </button>
        </form>
    }
}
