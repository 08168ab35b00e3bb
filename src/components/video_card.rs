//! Reusable card for video list items.
//!
//! DESIGN
//! ======
//! One card serves the browse grid, the related rail, profile tabs, and the
//! history/liked lists; the optional caption and delete affordance are what
//! vary between them.

use leptos::prelude::*;

use crate::net::types::VideoSummary;
use crate::util::{format, media};

/// A clickable card linking to a video's watch page.
#[component]
pub fn VideoCard(
    video: VideoSummary,
    /// Extra line under the meta row, e.g. `Watched 2024-03-01`. Callers
    /// pass the `Option` straight through from the formatting helper.
    #[prop(optional_no_strip)]
    caption: Option<String>,
    /// Shows a delete button and receives the video id when pressed.
    #[prop(optional)]
    on_delete: Option<Callback<i64>>,
    /// Replaces navigation with a callback receiving the video id. Home
    /// uses this to gate playback behind sign-in.
    #[prop(optional)]
    on_click: Option<Callback<i64>>,
) -> impl IntoView {
    let href = format!("/video/{}", video.id);
    let thumbnail = media::thumbnail_url(&video.thumbnail_url);
    let views = format::views_label(video.views);
    let likes = format::format_count(video.likes);
    let dislikes = format::format_count(video.dislikes);
    let uploaded = video.upload_date.as_deref().and_then(format::display_date);
    let id = video.id;
    let deletable = on_delete.is_some();
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id);
        }
    });
    let on_card_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            ev.prevent_default();
            on_click.run(id);
        }
    };

    view! {
        <a class="video-card" href=href on:click=on_card_click>
            <span class="video-card__thumb">
                {thumbnail
                    .map(|src| {
                        view! { <img class="video-card__thumb-img" src=src alt="" loading="lazy" /> }
                    })}
            </span>
            <span class="video-card__title">{video.title}</span>
            <span class="video-card__desc">{video.description}</span>
            <span class="video-card__meta">
                <span class="video-card__views">{views}</span>
                <span class="video-card__likes">{likes} " likes"</span>
                <span class="video-card__dislikes">{dislikes} " dislikes"</span>
                {uploaded.map(|date| view! { <span class="video-card__date">{date}</span> })}
            </span>
            {caption.map(|caption| view! { <span class="video-card__caption">{caption}</span> })}
            <Show when=move || deletable>
                <button
                    class="video-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete video"
                    aria-label="Delete video"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
