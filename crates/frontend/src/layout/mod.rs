pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell: header on top, the active page below
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header::AppHeader />
            <main class="app-content">{children()}</main>
        </div>
    }
}
