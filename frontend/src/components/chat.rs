use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::markdown::render_markdown;
use crate::models::Message;
use crate::state::AppState;

/// Floating toggle button plus the chat panel it opens.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="chat-widget">
            <Show when=move || state.is_open.get()>
                <ChatPanel />
            </Show>
            <button
                class="chat-toggle"
                class:open=move || state.is_open.get()
                aria-label="Toggle chat"
                on:click=move |_| state.toggle_chat()
            >
                {move || if state.is_open.get() { "×" } else { "💬" }}
            </button>
        </div>
    }
}

/// Message history, typing indicator, and input.
#[component]
fn ChatPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view; wait a tick so the new bubble is laid out.
    Effect::new(move |_| {
        state.session.track();
        if let Some(container) = messages_ref.get() {
            Timeout::new(100, move || {
                container.set_scroll_top(container.scroll_height());
            })
            .forget();
        }
    });

    view! {
        <section class="chat-panel">
            <header class="chat-header">"Wellness companion"</header>
            <div class="messages-container" node_ref=messages_ref>
                <For
                    each=move || state.session.with(|s| s.messages().to_vec())
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
                <Show when=move || state.is_busy()>
                    <div class="message assistant typing">"Thinking…"</div>
                </Show>
            </div>
            <ChatInput />
        </section>
    }
}

/// A single chat message bubble. Both sides are rendered as markdown.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = if message.is_user() {
        "message user markdown"
    } else {
        "message assistant markdown"
    };
    let html = render_markdown(&message.content);

    view! { <div class=css_class inner_html=html></div> }
}

/// Chat input form with text field and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_sending = move || state.is_busy();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if text.trim().is_empty() || is_sending() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    view! {
        <form class="input-row" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type your message…"
                prop:value=input
                on:input=move |ev| {
                    set_input.set(event_target_value(&ev));
                }
                disabled=is_sending
            />
            <button
                type="submit"
                class="send-btn"
                disabled=move || is_sending() || input.get().trim().is_empty()
            >
                {move || if is_sending() { "Sending…" } else { "Send" }}
            </button>
        </form>
    }
}
