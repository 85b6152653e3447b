mod api;
mod components;
mod markdown;
mod models;
mod session;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatWidget;
use state::AppState;

/// Root application component: the chat widget overlaid on the host page.
#[component]
fn App() -> impl IntoView {
    AppState::provide();

    view! {
        <ChatWidget />
    }
}

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    mount_to_body(App);
}
