//! Draft input and send button.

use leptos::prelude::*;

use crate::components::icons::SendIcon;
use crate::model::draft::{Draft, is_submit_key};

/// The draft signal belongs to the parent widget so it survives the row
/// unmounting while the panel is minimized.
#[component]
pub fn InputRow(
    draft: RwSignal<Draft>,
    #[prop(into)] placeholder: Signal<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let can_send = move || draft.with(Draft::can_send);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="chat-widget__input-row">
            <input
                class="chat-widget__input"
                type="text"
                placeholder=move || placeholder.get()
                prop:value=move || draft.with(|d| d.text().to_owned())
                on:input=move |ev| draft.update(|d| d.set(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                class="chat-widget__send"
                type="button"
                aria-label="Send message"
                disabled=move || !can_send()
                on:click=move |_| on_submit.run(())
            >
                <SendIcon/>
            </button>
        </div>
    }
}
