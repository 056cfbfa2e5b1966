use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Page};
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let on_logout = move |_| {
        do_logout(set_auth_state);
        ctx.navigate(Page::Home);
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">"Class Manager"</div>
            <nav class="app-header__nav">
                <button class="nav-link" on:click=move |_| ctx.navigate(Page::Home)>
                    "Home"
                </button>
                <button class="nav-link" on:click=move |_| ctx.navigate(Page::Register)>
                    "Register"
                </button>
            </nav>
            <div class="app-header__auth">
                <Show
                    when=move || auth_state.get().access_token.is_some()
                    fallback=move || {
                        view! {
                            <button class="nav-link" on:click=move |_| ctx.navigate(Page::Login)>
                                "Log In"
                            </button>
                        }
                    }
                >
                    <span class="app-header__user">
                        {move || {
                            auth_state
                                .get()
                                .user_info
                                .map(|u| u.full_name())
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="nav-link" on:click=on_logout>
                        "Log Out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
