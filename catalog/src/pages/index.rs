//! Story index: one card per catalog entry.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::stories::{STORIES, Story};

#[component]
pub fn StoryIndexPage() -> impl IntoView {
    view! {
        <main class="catalog">
            <h1 class="catalog__title">"Chat Widget"</h1>
            <ul class="catalog__stories">
                {STORIES.iter().map(|story| view! { <StoryCard story=story/> }).collect_view()}
            </ul>
        </main>
    }
}

#[component]
fn StoryCard(story: &'static Story) -> impl IntoView {
    let setup = story.setup();
    let swatch = format!("background: {};", setup.accent());
    view! {
        <li class="catalog__story">
            <span class="catalog__swatch" style=swatch></span>
            <A href=format!("/story/{}", story.slug)>{story.name}</A>
            <span class="catalog__story-meta">{setup.config.title}" / "{story.preset.name()}</span>
        </li>
    }
}
