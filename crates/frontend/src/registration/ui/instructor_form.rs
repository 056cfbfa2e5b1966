use chrono::NaiveDate;
use contracts::domain::instructors::InstructorRegisterDto;
use contracts::enums::Department;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::registration::api;
use crate::system::auth::context::use_auth;

/// Instructor profile form; the instructor counterpart of the student form.
#[component]
pub fn InstructorForm() -> impl IntoView {
    let form = RwSignal::new(InstructorRegisterDto::default());
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
                "Sorry, you need a User account to be able to register for your instructor account"
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
            match api::register_instructor(&dto, &access_token).await {
                Ok(response) => {
                    success.set(Some(response.message));
                    set_auth_state.update(|state| {
                        if let Some(user) = state.user_info.as_mut() {
                            user.is_instructor = true;
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
            <h3>"Create an Instructor account"</h3>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || success.get().map(|m| view! { <div class="success-message">{m}</div> })}

            <div class="form-group">
                <label for="instructor-date-of-birth">"Date of birth"</label>
                <input
                    type="date"
                    id="instructor-date-of-birth"
                    prop:value=move || form.get().date_of_birth.to_string()
                    on:input=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                            form.update(|f| f.date_of_birth = date);
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="instructor-department">"Department"</label>
                <select
                    id="instructor-department"
                    prop:value=move || form.get().department.code().to_string()
                    on:change=move |ev| {
                        if let Some(department) = Department::from_code(&event_target_value(&ev)) {
                            form.update(|f| f.department = department);
                        }
                    }
                >
                    {Department::all()
                        .into_iter()
                        .map(|department| {
                            view! { <option value=department.code()>{department.code()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Registering..." } else { "Register as instructor" }}
            </button>
        </form>
    }
}
