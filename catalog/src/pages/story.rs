//! Story page: one `ChatWidget` driven by a `DemoHarness`.

use chat_widget::ChatWidget;
use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::harness::DemoHarness;
use crate::stories::{Story, StoryArgs, StorySetup, find_story};

/// Resolves the story from the route and its overrides from `?args=`.
/// Malformed overrides are logged and ignored.
#[component]
pub fn StoryPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    move || {
        let slug = params.read().get("slug").unwrap_or_default();
        let Some(story) = find_story(&slug) else {
            return view! {
                <main class="catalog">
                    <p>"Unknown story: " {slug}</p>
                    <A href="/">"Back to catalog"</A>
                </main>
            }
            .into_any();
        };

        let raw_args = query.read().get("args").unwrap_or_default();
        let args = match StoryArgs::from_json(&raw_args) {
            Ok(args) => args,
            Err(err) => {
                log::warn!("story {}: ignoring args: {err}", story.slug);
                StoryArgs::default()
            }
        };
        let setup = story.setup_with(args);
        view! { <StoryView story=story setup=setup/> }.into_any()
    }
}

#[component]
fn StoryView(story: &'static Story, setup: StorySetup) -> impl IntoView {
    let harness = RwSignal::new(DemoHarness::new(Utc::now(), setup.unread_count));
    let reply_delay_ms = setup.reply_delay_ms;
    let config = setup.config;

    let messages = Signal::derive(move || harness.with(|h| h.messages.clone()));
    let is_open = Signal::derive(move || Some(harness.with(|h| h.is_open)));
    let is_minimized = Signal::derive(move || Some(harness.with(|h| h.is_minimized)));
    let unread_count = Signal::derive(move || Some(harness.with(|h| h.unread_count)));

    let on_send = move |text: String| {
        harness.update(|h| h.push_user_message(text, Utc::now()));
        schedule_reply(harness, reply_delay_ms);
    };

    view! {
        <main class="catalog catalog--story">
            <A href="/">"All stories"</A>
            <h1 class="catalog__title">{story.name}</h1>
            <ChatWidget
                messages=messages
                on_send_message=on_send
                theme=config.theme
                title=config.title
                placeholder=config.placeholder
                bot_name=config.bot_name
                position=config.position
                is_open=is_open
                is_minimized=is_minimized
                unread_count=unread_count
                is_typing=setup.is_typing
                on_toggle_open=move |()| harness.update(DemoHarness::toggle_open)
                on_minimize=move |()| harness.update(DemoHarness::minimize)
                on_close=move |()| harness.update(DemoHarness::close)
                on_restore=move |()| harness.update(DemoHarness::restore)
            />
        </main>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_reply(harness: RwSignal<DemoHarness>, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if harness.try_update(|h| h.deliver_reply(Utc::now())).is_none() {
            log::debug!("story left before the bot reply landed");
        }
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule_reply(_harness: RwSignal<DemoHarness>, delay_ms: u32) {
    log::debug!("bot reply in {delay_ms}ms skipped outside the browser");
}
