//! Scrollable message history with the trailing typing indicator.

use leptos::html::Div;
use leptos::prelude::*;

use crate::model::message::Message;
use crate::model::message_list::{MessageRow, ScrollKey, message_rows};
use crate::util::time_label::{HourCycle, mounted_time_label};

/// Bubbles in caller order. Rows are keyed by message id, so ids must be
/// unique within `messages`.
#[component]
pub fn MessageList(
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(into)] hour_cycle: Signal<HourCycle>,
    #[prop(into)] show_typing: Signal<bool>,
    #[prop(into)] typing_label: Signal<String>,
) -> impl IntoView {
    let list_ref = NodeRef::<Div>::new();

    // Effects only run in the browser, so server HTML carries empty time
    // labels and hydration fills them in the viewer's zone.
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    // Tracks only `messages`, so theme or flag changes never scroll.
    Effect::new(move |previous: Option<ScrollKey>| {
        let key = messages.with(|m| ScrollKey::of(m));
        if key.should_scroll(previous.as_ref()) {
            scroll_to_newest(list_ref);
        }
        key
    });

    view! {
        <div class="chat-widget__messages" node_ref=list_ref>
            <For
                each=move || messages.with(|m| message_rows(m, hour_cycle.get()).collect::<Vec<_>>())
                key=|row| row.id.clone()
                children=move |row: MessageRow| {
                    let class = row.class();
                    let timestamp = row.timestamp;
                    let time_label = move || mounted_time_label(&timestamp, hour_cycle.get(), mounted.get());
                    view! {
                        <div class=class>
                            <div class="chat-widget__bubble">{row.text}</div>
                            <div class="chat-widget__time">{time_label}</div>
                        </div>
                    }
                }
            />
            <Show when=move || show_typing.get()>
                <div class="chat-widget__typing" aria-live="polite">
                    <div class="chat-widget__typing-dots">
                        <span class="chat-widget__typing-dot"></span>
                        <span class="chat-widget__typing-dot"></span>
                        <span class="chat-widget__typing-dot"></span>
                    </div>
                    <span class="chat-widget__typing-label">{move || typing_label.get()}</span>
                </div>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn scroll_to_newest(list_ref: NodeRef<Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = list_ref.get_untracked() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    }
}
