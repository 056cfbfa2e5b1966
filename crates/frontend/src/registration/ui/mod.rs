pub mod instructor_form;
pub mod student_form;
pub mod user_form;

use contracts::enums::RegisterRole;
use leptos::prelude::*;

use super::selection::{RoleFormTable, SelectionMachine};
use super::validator;
use instructor_form::InstructorForm;
use student_form::StudentForm;
use user_form::UserForm;

/// The register page: three role selector buttons over a container with
/// one registration form per role. Exactly one form is visible after a
/// selection; the container stays hidden until the first click.
///
/// An explicit role→form table can be passed in; it defaults to the
/// page's standard mapping.
#[component]
pub fn RegisterPage(#[prop(optional)] table: Option<RoleFormTable>) -> impl IntoView {
    let table = table.unwrap_or_else(RoleFormTable::standard);
    let machine = RwSignal::new(SelectionMachine::new(table.clone()));

    // Audit the mounted markup once
    {
        let table = table.clone();
        Effect::new(move |_| {
            let report = validator::validate_register_page(&table);
            validator::log_report(&report);
        });
    }

    let buttons = RegisterRole::all()
        .into_iter()
        .map(|role| {
            let code = role.code();
            view! {
                <button
                    type="button"
                    class="btn btn-toggle"
                    data-role=code
                    on:click=move |_| {
                        machine.update(|m| {
                            m.select(code);
                        });
                    }
                >
                    {role.display_name()}
                </button>
            }
        })
        .collect_view();

    let forms = table
        .entries()
        .iter()
        .map(|entry| {
            let role = entry.role;
            let form_id = entry.form_id.clone();
            let content = match role {
                RegisterRole::User => view! { <UserForm /> }.into_any(),
                RegisterRole::Student => view! { <StudentForm /> }.into_any(),
                RegisterRole::Instructor => view! { <InstructorForm /> }.into_any(),
            };
            view! {
                <div
                    id=form_id
                    class="register-form"
                    class:hidden=move || !machine.with(|m| m.is_form_visible(role))
                >
                    {content}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="register-page">
            <h1>"Join Class Manager"</h1>
            <p>"Pick the kind of account you want to create."</p>
            <div id="register-buttons" class="register-buttons">{buttons}</div>
            <div
                class="register-forms"
                class:hidden=move || !machine.with(|m| m.container_visible())
            >
                {forms}
            </div>
        </div>
    }
}
