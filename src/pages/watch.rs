//! Watch page: playback, reactions, comments, and a related rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything on this page is keyed by the route's video id. Navigating to
//! a related video re-runs the same load path, so every in-flight response
//! double-checks both the component's alive flag and the id it was fetched
//! for before touching state. The thumbnail is shown first; the player is
//! revealed and started after a short fixed delay.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_params_map;

use crate::components::comments::CommentList;
use crate::components::video_card::VideoCard;
use crate::net::types::LikeStatus;
use crate::state::auth::AuthState;
use crate::state::watch::{WatchState, next_like_status};
use crate::util::{format, media};

#[cfg(feature = "hydrate")]
const REVEAL_DELAY: std::time::Duration = std::time::Duration::from_millis(1500);

/// Route param as a video id; `None` covers absent and malformed values.
#[cfg(any(test, feature = "hydrate"))]
fn parse_video_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}

#[component]
pub fn WatchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(WatchState {
        loading: true,
        ..WatchState::default()
    });
    let current_id = RwSignal::new(None::<i64>);
    let revealed = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::component_alive();

    #[cfg(feature = "hydrate")]
    {
        let params = use_params_map();
        let load_alive = alive.clone();
        Effect::new(move || {
            let id = parse_video_id(params.read().get("id").as_deref());
            if id == current_id.get_untracked() {
                return;
            }
            current_id.set(id);
            revealed.set(false);
            let Some(id) = id else {
                state.set(WatchState {
                    loading: false,
                    error: Some("Video not found".to_owned()),
                    ..WatchState::default()
                });
                return;
            };
            state.set(WatchState {
                loading: true,
                ..WatchState::default()
            });
            load_detail(state, id, current_id, load_alive.clone());
            schedule_reveal(revealed, video_ref, id, current_id, load_alive.clone());
            if crate::session::current().is_some() {
                record_view(id);
            }
        });
    }

    let on_react = {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        Callback::new(move |pressed: LikeStatus| {
            if !auth.with_untracked(AuthState::signed_in) {
                crate::util::guard::redirect_to_login();
                return;
            }
            if current_id.get_untracked().is_none() {
                return;
            }
            let next = next_like_status(state.with_untracked(WatchState::viewer_status), pressed);
            state.update(|watch| watch.react(next));
            #[cfg(feature = "hydrate")]
            submit_reaction(state, next, current_id, alive.clone());
        })
    };

    let on_comment = {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        Callback::new(move |text: String| {
            if !auth.with_untracked(AuthState::signed_in) {
                crate::util::guard::redirect_to_login();
                return;
            }
            if current_id.get_untracked().is_none() {
                return;
            }
            #[cfg(feature = "hydrate")]
            submit_comment(state, text, current_id, alive.clone());
            #[cfg(not(feature = "hydrate"))]
            let _ = text;
        })
    };

    // Memoized so reaction and comment re-fetches never recreate the
    // <video> element mid-playback.
    let video_src = Memo::new(move |_| {
        state.with(|watch| {
            watch
                .detail
                .as_ref()
                .and_then(|detail| media::video_url(&detail.video.video_url))
        })
    });
    let poster_src = Memo::new(move |_| {
        state.with(|watch| {
            watch
                .detail
                .as_ref()
                .and_then(|detail| media::thumbnail_url(&detail.video.thumbnail_url))
        })
    });

    view! {
        <div class="watch-page">
            <Show when=move || state.get().loading>
                <p class="watch-page__loading">"Loading..."</p>
            </Show>
            <Show when=move || state.with(|watch| !watch.loading && watch.detail.is_none())>
                <p class="watch-page__error">
                    {move || {
                        state
                            .with(|watch| watch.error.clone())
                            .unwrap_or_else(|| "Video not found".to_owned())
                    }}
                </p>
            </Show>
            <Show when=move || state.with(|watch| watch.detail.is_some())>
                <div class="watch-page__layout">
                    <section class="watch-page__main">
                        <div
                            class="watch-page__player"
                            class:watch-page__player--revealed=move || revealed.get()
                        >
                            {move || {
                                poster_src
                                    .get()
                                    .map(|src| {
                                        view! { <img class="watch-page__poster" src=src alt=""/> }
                                    })
                            }}
                            {move || {
                                video_src
                                    .get()
                                    .map(|src| {
                                        view! {
                                            <video
                                                class="watch-page__video"
                                                node_ref=video_ref
                                                src=src
                                                poster=poster_src.get().unwrap_or_default()
                                                controls
                                            ></video>
                                        }
                                    })
                            }}
                        </div>

                        {move || {
                            state
                                .with(|watch| {
                                    watch.detail.as_ref().and_then(|detail| detail.user.clone())
                                })
                                .map(|uploader| {
                                    let href = format!("/profile/{}", uploader.id);
                                    let avatar = uploader
                                        .profile_pic_url
                                        .as_deref()
                                        .and_then(media::profile_pic_url);
                                    view! {
                                        <a class="watch-page__uploader" href=href>
                                            {avatar
                                                .map(|src| {
                                                    view! {
                                                        <img
                                                            class="watch-page__uploader-avatar"
                                                            src=src
                                                            alt=""
                                                        />
                                                    }
                                                })}
                                            <span class="watch-page__uploader-name">
                                                {uploader.username}
                                            </span>
                                        </a>
                                    }
                                })
                        }}

                        {move || {
                            state
                                .with(|watch| {
                                    watch
                                        .detail
                                        .as_ref()
                                        .map(|detail| {
                                            (
                                                detail.video.title.clone(),
                                                detail.video.description.clone(),
                                                detail.video.views,
                                                detail.video.upload_date.clone(),
                                            )
                                        })
                                })
                                .map(|(title, description, views, upload_date)| {
                                    let views = format::views_label(views);
                                    let uploaded = upload_date
                                        .as_deref()
                                        .and_then(format::display_date);
                                    view! {
                                        <h1 class="watch-page__title">{title}</h1>
                                        <p class="watch-page__desc">{description}</p>
                                        <p class="watch-page__meta">
                                            <span class="watch-page__views">{views}</span>
                                            {uploaded
                                                .map(|date| {
                                                    view! {
                                                        <span class="watch-page__date">{date}</span>
                                                    }
                                                })}
                                        </p>
                                    }
                                })
                        }}

                        <div class="watch-page__reactions">
                            <button
                                class="btn watch-page__reaction"
                                class:watch-page__reaction--active=move || {
                                    state.with(WatchState::viewer_status) == LikeStatus::Liked
                                }
                                on:click=move |_| on_react.run(LikeStatus::Liked)
                            >
                                "👍 "
                                {move || {
                                    state
                                        .with(|watch| {
                                            watch
                                                .detail
                                                .as_ref()
                                                .map_or(0, |detail| detail.likes)
                                        })
                                }}
                            </button>
                            <button
                                class="btn watch-page__reaction"
                                class:watch-page__reaction--active=move || {
                                    state.with(WatchState::viewer_status) == LikeStatus::Disliked
                                }
                                on:click=move |_| on_react.run(LikeStatus::Disliked)
                            >
                                "👎 "
                                {move || {
                                    state
                                        .with(|watch| {
                                            watch
                                                .detail
                                                .as_ref()
                                                .map_or(0, |detail| detail.dislikes)
                                        })
                                }}
                            </button>
                        </div>

                        <CommentList
                            comments=Signal::derive(move || {
                                state
                                    .with(|watch| {
                                        watch
                                            .detail
                                            .as_ref()
                                            .map(|detail| detail.comments.clone())
                                            .unwrap_or_default()
                                    })
                            })
                            viewer_id=Signal::derive(move || auth.with(AuthState::user_id))
                            on_submit=on_comment
                        />
                    </section>

                    <aside class="watch-page__related">
                        <h3 class="watch-page__related-heading">"Recommendations"</h3>
                        <div class="watch-page__related-list">
                            {move || {
                                state
                                    .get()
                                    .related
                                    .into_iter()
                                    .map(|video| view! { <VideoCard video=video/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </aside>
                </div>
            </Show>
        </div>
    }
}

/// Fetch the watch payload for `id`, dropping the response if the page
/// moved on while it was in flight.
#[cfg(feature = "hydrate")]
fn load_detail(
    state: RwSignal<WatchState>,
    id: i64,
    current_id: RwSignal<Option<i64>>,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_video_detail(id).await;
        if !alive.load(Ordering::Relaxed) || current_id.get_untracked() != Some(id) {
            return;
        }
        match result {
            Ok(payload) => state.update(|watch| watch.apply(payload)),
            Err(err) => {
                log::warn!("video {id} load failed: {err}");
                state.update(|watch| {
                    watch.loading = false;
                    watch.error = Some(err.to_string());
                });
            }
        }
    });
}

/// Swap the thumbnail for the player and start playback once the reveal
/// delay has passed, unless the page has moved to another video.
#[cfg(feature = "hydrate")]
fn schedule_reveal(
    revealed: RwSignal<bool>,
    video_ref: NodeRef<leptos::html::Video>,
    id: i64,
    current_id: RwSignal<Option<i64>>,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(REVEAL_DELAY).await;
        if !alive.load(Ordering::Relaxed) || current_id.get_untracked() != Some(id) {
            return;
        }
        revealed.set(true);
        if let Some(video) = video_ref.get_untracked() {
            if let Ok(promise) = video.play() {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    log::debug!("autoplay blocked until the viewer interacts");
                }
            }
        }
    });
}

/// Fire-and-forget watch-history entry; failures are only logged.
#[cfg(feature = "hydrate")]
fn record_view(id: i64) {
    leptos::task::spawn_local(async move {
        if let Err(err) = crate::net::api::record_watch(id).await {
            log::warn!("watch-history update failed: {err}");
        }
    });
}

/// Send the viewer's reaction, then re-fetch so counts match the server.
/// Errors other than a rejected token also re-fetch, which rolls back the
/// optimistic arithmetic.
#[cfg(feature = "hydrate")]
fn submit_reaction(
    state: RwSignal<WatchState>,
    next: LikeStatus,
    current_id: RwSignal<Option<i64>>,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        let Some(id) = current_id.get_untracked() else {
            return;
        };
        let result = crate::net::api::submit_like(id, next).await;
        if !alive.load(Ordering::Relaxed) || current_id.get_untracked() != Some(id) {
            return;
        }
        match result {
            Ok(()) => load_detail(state, id, current_id, alive),
            Err(crate::net::error::ApiError::Auth) => {}
            Err(err) => {
                log::warn!("reaction update failed: {err}");
                load_detail(state, id, current_id, alive);
            }
        }
    });
}

/// Post (or replace) the viewer's comment, then re-fetch the thread.
#[cfg(feature = "hydrate")]
fn submit_comment(
    state: RwSignal<WatchState>,
    text: String,
    current_id: RwSignal<Option<i64>>,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        let Some(id) = current_id.get_untracked() else {
            return;
        };
        let result = crate::net::api::post_comment(id, &text).await;
        if !alive.load(Ordering::Relaxed) || current_id.get_untracked() != Some(id) {
            return;
        }
        match result {
            Ok(()) => load_detail(state, id, current_id, alive),
            Err(crate::net::error::ApiError::Auth) => {}
            Err(err) => log::warn!("comment post failed: {err}"),
        }
    });
}
