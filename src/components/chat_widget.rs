//! Root chat widget component.
//!
//! DESIGN
//! ======
//! All props are read through signals and folded into one memoised
//! `ResolvedConfig`, so theme, corner, and label defaults are decided once
//! per change instead of in every child. Clicks go through
//! `presentation::activate` and the draft through `Draft::submit`; both emit
//! `WidgetEvent`s into a `CallbackSink`, which forwards each one to the
//! matching callback prop. Missing optional callbacks are no-ops.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

#[cfg(all(test, feature = "ssr"))]
#[path = "chat_widget_render_test.rs"]
mod chat_widget_render_test;

use leptos::prelude::*;

use crate::components::input_row::InputRow;
use crate::components::message_list::MessageList;
use crate::components::panel_header::PanelHeader;
use crate::components::toggle_button::ToggleButton;
use crate::model::draft::Draft;
use crate::model::events::{WidgetEvent, WidgetEvents};
use crate::model::message::Message;
use crate::model::position::Position;
use crate::model::presentation::{Control, PresentationFlags, activate};
use crate::model::props::WidgetConfig;
use crate::model::theme::ThemeOverride;
use crate::util::stylesheet::render_stylesheet;
use crate::util::time_label::HourCycle;

/// Forwards widget events to the caller's callback props.
#[derive(Clone, Copy)]
pub struct CallbackSink {
    pub send_message: Callback<String>,
    pub toggle_open: Option<Callback<()>>,
    pub minimize: Option<Callback<()>>,
    pub close: Option<Callback<()>>,
    pub restore: Option<Callback<()>>,
    pub typing_start: Option<Callback<()>>,
    pub typing_end: Option<Callback<()>>,
}

impl CallbackSink {
    #[must_use]
    pub fn new(send_message: Callback<String>) -> Self {
        Self {
            send_message,
            toggle_open: None,
            minimize: None,
            close: None,
            restore: None,
            typing_start: None,
            typing_end: None,
        }
    }
}

impl WidgetEvents for CallbackSink {
    fn emit(&self, event: WidgetEvent) {
        let optional = match event {
            WidgetEvent::SendMessage(text) => {
                self.send_message.run(text);
                return;
            }
            WidgetEvent::ToggleOpen => self.toggle_open,
            WidgetEvent::Minimize => self.minimize,
            WidgetEvent::Close => self.close,
            WidgetEvent::Restore => self.restore,
            WidgetEvent::TypingStart => self.typing_start,
            WidgetEvent::TypingEnd => self.typing_end,
        };
        if let Some(callback) = optional {
            callback.run(());
        }
    }
}

/// Floating chat widget.
///
/// `messages`, the open/minimized flags, the unread counter, and the typing
/// flag are owned by the caller. The widget requests changes through the
/// callbacks and renders whatever it is given next.
#[component]
pub fn ChatWidget(
    /// Messages in display order.
    #[prop(into)]
    messages: Signal<Vec<Message>>,
    /// Receives the raw draft text on send.
    #[prop(into)]
    on_send_message: Callback<String>,
    #[prop(into, optional)] theme: MaybeProp<ThemeOverride>,
    #[prop(into, optional)] title: MaybeProp<String>,
    #[prop(into, optional)] placeholder: MaybeProp<String>,
    #[prop(into, optional)] bot_name: MaybeProp<String>,
    #[prop(into, optional)] position: MaybeProp<Position>,
    #[prop(into, optional)] hour_cycle: MaybeProp<HourCycle>,
    #[prop(into, optional)] is_open: MaybeProp<bool>,
    #[prop(into, optional)] is_minimized: MaybeProp<bool>,
    #[prop(into, optional)] unread_count: MaybeProp<u32>,
    #[prop(into, optional)] is_typing: MaybeProp<bool>,
    #[prop(into, optional)] on_toggle_open: Option<Callback<()>>,
    #[prop(into, optional)] on_minimize: Option<Callback<()>>,
    #[prop(into, optional)] on_close: Option<Callback<()>>,
    #[prop(into, optional)] on_restore: Option<Callback<()>>,
    #[prop(into, optional)] on_typing_start: Option<Callback<()>>,
    #[prop(into, optional)] on_typing_end: Option<Callback<()>>,
) -> impl IntoView {
    let sink = CallbackSink {
        send_message: on_send_message,
        toggle_open: on_toggle_open,
        minimize: on_minimize,
        close: on_close,
        restore: on_restore,
        typing_start: on_typing_start,
        typing_end: on_typing_end,
    };

    let resolved = Memo::new(move |_| {
        let defaults = WidgetConfig::default();
        WidgetConfig {
            theme: theme.get().unwrap_or_default(),
            title: title.get().unwrap_or(defaults.title),
            placeholder: placeholder.get().unwrap_or(defaults.placeholder),
            bot_name: bot_name.get().unwrap_or(defaults.bot_name),
            position: position.get().unwrap_or(defaults.position),
            hour_cycle: hour_cycle.get(),
        }
        .resolve()
    });
    let stylesheet = Memo::new(move |_| resolved.with(|c| render_stylesheet(&c.theme)));

    let flags = Memo::new(move |_| {
        PresentationFlags::new(is_open.get().unwrap_or(false), is_minimized.get().unwrap_or(false))
    });
    let state = Memo::new(move |_| flags.get().state());
    let unread = Signal::derive(move || unread_count.get().unwrap_or(0));

    let draft = RwSignal::new(Draft::new());

    let on_control = Callback::new(move |control: Control| {
        activate(flags.get_untracked(), control, &sink);
    });
    let on_toggle = Callback::new(move |()| on_control.run(Control::ToggleButton));
    let on_submit = Callback::new(move |()| {
        let mut current = draft.get_untracked();
        if current.submit(&sink) {
            draft.set(current);
        }
    });

    view! {
        <style>{move || stylesheet.get()}</style>
        <div class="chat-widget" style=move || resolved.with(|c| c.toggle_style.to_css())>
            <Show when=move || state.get().toggle_visible()>
                <ToggleButton unread_count=unread on_activate=on_toggle/>
            </Show>
            <Show when=move || state.get().panel_visible()>
                <div
                    class=move || state.get().panel_class()
                    style=move || resolved.with(|c| c.panel_style.to_css())
                >
                    <PanelHeader
                        state=state
                        title=Signal::derive(move || resolved.with(|c| c.title.clone()))
                        unread_count=unread
                        on_control=on_control
                    />
                    <Show when=move || state.get().body_rendered()>
                        <MessageList
                            messages=messages
                            hour_cycle=Signal::derive(move || resolved.with(|c| c.hour_cycle))
                            show_typing=Signal::derive(move || {
                                state.get().shows_typing_indicator(is_typing.get().unwrap_or(false))
                            })
                            typing_label=Signal::derive(move || resolved.with(|c| c.typing_label()))
                        />
                        <InputRow
                            draft=draft
                            placeholder=Signal::derive(move || resolved.with(|c| c.placeholder.clone()))
                            on_submit=on_submit
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
