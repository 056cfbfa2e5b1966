use chrono::NaiveDate;
use contracts::domain::students::StudentRegisterDto;
use contracts::enums::{Major, Standing};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::registration::api;
use crate::system::auth::context::use_auth;

/// Student profile form. Requires a logged-in account; submitting without
/// one surfaces the same failure message the backend would send.
#[component]
pub fn StudentForm() -> impl IntoView {
    let form = RwSignal::new(StudentRegisterDto::default());
    let error = RwSignal::new(Option::<String>::None);
    let success = RwSignal::new(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = form.get();
        error.set(None);
        success.set(None);

        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }

        let state = auth_state.get_untracked();
        let Some(access_token) = state.access_token else {
            error.set(Some(
                "Sorry, you need a User account to be able to register for your student account"
                    .to_string(),
            ));
            return;
        };
        if state.user_info.as_ref().is_some_and(|u| u.has_role_profile()) {
            error.set(Some(
                "Sorry, you cannot create another Student/Instructor account".to_string(),
            ));
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::register_student(&dto, &access_token).await {
                Ok(response) => {
                    success.set(Some(response.message));
                    set_auth_state.update(|state| {
                        if let Some(user) = state.user_info.as_mut() {
                            user.is_student = true;
                        }
                    });
                }
                Err(e) => error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <form class="details-form" on:submit=on_submit>
            <h3>"Create a Student account"</h3>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || success.get().map(|m| view! { <div class="success-message">{m}</div> })}

            <div class="form-group">
                <label for="student-date-of-birth">"Date of birth"</label>
                <input
                    type="date"
                    id="student-date-of-birth"
                    prop:value=move || form.get().date_of_birth.to_string()
                    on:input=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                            form.update(|f| f.date_of_birth = date);
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="student-major">"Major"</label>
                <select
                    id="student-major"
                    prop:value=move || form.get().major.code().to_string()
                    on:change=move |ev| {
                        if let Some(major) = Major::from_code(&event_target_value(&ev)) {
                            form.update(|f| f.major = major);
                        }
                    }
                >
                    {Major::all()
                        .into_iter()
                        .map(|major| view! { <option value=major.code()>{major.code()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="student-standing">"Standing"</label>
                <select
                    id="student-standing"
                    prop:value=move || form.get().standing.code().to_string()
                    on:change=move |ev| {
                        if let Some(standing) = Standing::from_code(&event_target_value(&ev)) {
                            form.update(|f| f.standing = standing);
                        }
                    }
                >
                    {Standing::all()
                        .into_iter()
                        .map(|standing| {
                            view! {
                                <option value=standing.code()>{standing.display_name()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="student-credits">"Credits completed"</label>
                <input
                    type="number"
                    id="student-credits"
                    min="0"
                    prop:value=move || form.get().credits.to_string()
                    on:input=move |ev| {
                        if let Ok(credits) = event_target_value(&ev).parse::<u32>() {
                            form.update(|f| f.credits = credits);
                        }
                    }
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Registering..." } else { "Register as student" }}
            </button>
        </form>
    }
}
