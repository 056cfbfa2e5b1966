use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::system::auth::context::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let role_line = move || {
        let state = auth_state.get();
        match state.user_info {
            Some(user) if user.is_student => {
                format!("Welcome back, {}! You are registered as a student.", user.full_name())
            }
            Some(user) if user.is_instructor => {
                format!(
                    "Welcome back, {}! You are registered as an instructor.",
                    user.full_name()
                )
            }
            Some(user) => format!(
                "Welcome back, {}! Finish signing up by filling out a Student or Instructor form.",
                user.full_name()
            ),
            None => "Manage your classes, assignments and submissions in one place.".to_string(),
        }
    };

    view! {
        <div class="home-page">
            <h1>"Class Manager"</h1>
            <p>{role_line}</p>
            <Show when=move || auth_state.get().access_token.is_none()>
                <div class="home-page__actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Register)>
                        "Create an account"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Page::Login)>
                        "Log in"
                    </button>
                </div>
            </Show>
        </div>
    }
}
