use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::ChatSession;

/// Shared widget state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub session: ReadSignal<ChatSession>,
    pub is_open: ReadSignal<bool>,

    // --- Write signals (for mutating state) ---
    pub set_session: WriteSignal<ChatSession>,
    pub set_is_open: WriteSignal<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (session, set_session) = signal(ChatSession::new());
        let (is_open, set_is_open) = signal(false);

        let state = Self { session, is_open, set_session, set_is_open };
        provide_context(state);
        state
    }

    pub fn toggle_chat(&self) {
        self.set_is_open.update(|open| *open = !*open);
    }

    pub fn is_busy(&self) -> bool {
        self.session.with(ChatSession::is_busy)
    }

    /// Appends the user's message and posts the whole conversation.
    /// Does nothing for blank input or while a request is outstanding.
    pub fn send_message(&self, text: String) {
        let mut outgoing = None;
        self.set_session.update(|s| outgoing = s.begin_submit(&text, now_ms()));
        let Some(messages) = outgoing else {
            return;
        };

        log::debug!("Sending {} messages to API", messages.len());
        let set_session = self.set_session;
        spawn_local(async move {
            let result = api::send_chat(&messages).await;
            set_session.update(|s| s.complete(result, now_ms()));
        });
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
