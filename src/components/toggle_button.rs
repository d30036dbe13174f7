//! Floating round button that asks the caller to open the panel.

use leptos::prelude::*;

use crate::components::icons::ChatIcon;
use crate::model::presentation::unread_badge_label;

/// Toggle button with the unread badge. Rendered only while the panel is hidden.
#[component]
pub fn ToggleButton(
    #[prop(into)] unread_count: Signal<u32>,
    on_activate: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="chat-widget__toggle"
            type="button"
            aria-label="Open chat"
            on:click=move |_| on_activate.run(())
        >
            <ChatIcon/>
            {move || {
                unread_badge_label(unread_count.get())
                    .map(|label| view! { <span class="chat-widget__badge">{label}</span> })
            }}
        </button>
    }
}
