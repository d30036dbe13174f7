//! Panel header in its expanded and minimized forms.
//!
//! In the minimized form the whole strip restores the panel, while the close
//! button nested inside it must only close. Both handlers stop propagation
//! so each click reaches exactly one control.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::icons::{CloseIcon, MinimizeIcon};
use crate::model::presentation::{Control, PresentationState, unread_badge_label};

#[component]
pub fn PanelHeader(
    #[prop(into)] state: Signal<PresentationState>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] unread_count: Signal<u32>,
    on_control: Callback<Control>,
) -> impl IntoView {
    let claim = move |control: Control| {
        move |ev: MouseEvent| {
            ev.stop_propagation();
            on_control.run(control);
        }
    };

    view! {
        <div class="chat-widget__header">
            {move || match state.get() {
                PresentationState::Minimized => view! {
                    <div class="chat-widget__minimized" on:click=claim(Control::MinimizedHeader)>
                        <div class="chat-widget__minimized-info">
                            <h3 class="chat-widget__title">{move || title.get()}</h3>
                            {move || {
                                unread_badge_label(unread_count.get()).map(|label| {
                                    view! {
                                        <span class="chat-widget__badge chat-widget__badge--inline">{label}</span>
                                    }
                                })
                            }}
                        </div>
                        <div class="chat-widget__controls">
                            <button
                                class="chat-widget__control"
                                type="button"
                                aria-label="Close chat"
                                on:click=claim(Control::CloseButton)
                            >
                                <CloseIcon/>
                            </button>
                        </div>
                    </div>
                }
                    .into_any(),
                PresentationState::Expanded | PresentationState::Hidden => view! {
                    <h3 class="chat-widget__title">{move || title.get()}</h3>
                    <div class="chat-widget__controls">
                        <button
                            class="chat-widget__control"
                            type="button"
                            aria-label="Minimize chat"
                            on:click=claim(Control::MinimizeButton)
                        >
                            <MinimizeIcon/>
                        </button>
                        <button
                            class="chat-widget__control"
                            type="button"
                            aria-label="Close chat"
                            on:click=claim(Control::CloseButton)
                        >
                            <CloseIcon/>
                        </button>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}
