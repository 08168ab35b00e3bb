//! Liked-videos page: a dated grid of everything the viewer has liked.

use leptos::prelude::*;

use crate::components::video_card::VideoCard;
use crate::state::library::LibraryState;
use crate::util::format;
use crate::util::guard::require_session;

#[component]
pub fn LikedPage() -> impl IntoView {
    let _auth = require_session();
    let library = RwSignal::new(LibraryState {
        loading: true,
        ..LibraryState::default()
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::atomic::Ordering;

        use crate::net::error::ApiError;

        let alive = crate::util::alive::component_alive();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_liked().await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(items) => library.update(|state| {
                    state.items = items;
                    state.loading = false;
                }),
                Err(ApiError::Auth) => {}
                Err(err) => {
                    log::warn!("liked-videos load failed: {err}");
                    library.update(|state| {
                        state.error = Some(err.to_string());
                        state.loading = false;
                    });
                }
            }
        });
    }

    view! {
        <div class="library-page">
            <h1 class="library-page__title">"Liked Videos"</h1>
            <Show when=move || library.get().loading>
                <p class="library-page__loading">"Loading..."</p>
            </Show>
            <Show when=move || library.get().error.is_some()>
                <p class="library-page__error">{move || library.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || library.get().show_empty()>
                <p class="library-page__empty">"No liked videos yet."</p>
            </Show>
            <div class="video-grid">
                {move || {
                    library
                        .get()
                        .items
                        .into_iter()
                        .map(|video| {
                            let caption = format::dated_label("Liked", video.liked_at.as_deref());
                            view! { <VideoCard video=video caption=caption/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
