use crate::layout::global_context::{use_app_context, Page};
use crate::layout::Shell;
use crate::registration::ui::RegisterPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell>
            {move || match ctx.page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Register => view! { <RegisterPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
            }}
        </Shell>
    }
}
