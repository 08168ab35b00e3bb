//! Browse page: the public catalog plus a personalized rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public landing route. Two fetches race at mount, the full
//! catalog and the recommendation rail, so a slow personalized call never
//! holds up the public grid. Signed-out visitors get the public list in the
//! rail slot and a sign-up banner; clicking a card while signed out opens a
//! login prompt instead of navigating.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::login_prompt::LoginPromptDialog;
use crate::components::skeleton::SkeletonGrid;
use crate::components::video_card::VideoCard;
use crate::net::types::VideoSummary;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;

/// Heading above the full catalog grid.
fn catalog_heading(signed_in: bool) -> &'static str {
    if signed_in { "More Videos" } else { "Featured Videos" }
}

/// Browse page: recommendation rail on top, full catalog below.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = RwSignal::new(CatalogState {
        loading: true,
        ..CatalogState::default()
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::atomic::Ordering;

        use crate::net::error::ApiError;

        let alive = crate::util::alive::component_alive();

        let catalog_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_videos().await;
            if !catalog_alive.load(Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(videos) => catalog.update(|state| {
                    state.videos = videos;
                    state.loading = false;
                }),
                Err(err) => {
                    log::warn!("catalog load failed: {err}");
                    catalog.update(|state| {
                        state.error = Some(err.to_string());
                        state.loading = false;
                    });
                }
            }
        });

        // The rail is best-effort: signed-in viewers get the personalized
        // list, everyone else the public one, and a failure leaves the
        // catalog-backed fallback in place.
        let signed_in = crate::session::current().is_some();
        leptos::task::spawn_local(async move {
            let result = if signed_in {
                crate::net::api::fetch_recommended().await
            } else {
                crate::net::api::fetch_videos().await
            };
            match result {
                Ok(videos) if alive.load(Ordering::Relaxed) => {
                    catalog.update(|state| state.recommended = videos);
                }
                Ok(_) => {}
                Err(ApiError::Auth) => {}
                Err(err) => log::warn!("recommendation load failed: {err}"),
            }
        });
    }

    let show_prompt = RwSignal::new(false);
    let prompt_login = Callback::new(move |_: i64| show_prompt.set(true));
    let dismiss_prompt = Callback::new(move |()| show_prompt.set(false));

    view! {
        <div class="home-page">
            <Show when=move || !auth.get().signed_in()>
                <div class="home-page__banner">
                    <p class="home-page__banner-text">
                        "Create an account to unlock personalized recommendations and more features!"
                    </p>
                    <a class="btn home-page__banner-link" href="/register">
                        "Sign Up"
                    </a>
                </div>
            </Show>

            <Show when=move || catalog.get().error.is_some()>
                <p class="home-page__error">{move || catalog.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <SkeletonGrid/> }
            >
                <Show when=move || catalog.with(|state| !state.rail().is_empty())>
                    <section class="home-page__rail">
                        <h2 class="home-page__heading">"Recommended for You"</h2>
                        <div class="video-grid">
                            {move || {
                                let signed_in = auth.get().signed_in();
                                let state = catalog.get();
                                state
                                    .rail()
                                    .iter()
                                    .cloned()
                                    .map(|video| {
                                        view! {
                                            <GatedCard
                                                video=video
                                                signed_in=signed_in
                                                prompt=prompt_login
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                </Show>

                <section class="home-page__catalog">
                    <h2 class="home-page__heading">
                        {move || catalog_heading(auth.get().signed_in())}
                    </h2>
                    <Show when=move || catalog.get().show_empty()>
                        <p class="home-page__empty">"No videos available yet."</p>
                    </Show>
                    <div class="video-grid">
                        {move || {
                            let signed_in = auth.get().signed_in();
                            catalog
                                .get()
                                .videos
                                .into_iter()
                                .map(|video| {
                                    view! {
                                        <GatedCard
                                            video=video
                                            signed_in=signed_in
                                            prompt=prompt_login
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>

            <Show when=move || show_prompt.get()>
                <LoginPromptDialog
                    message="Please log in or create an account to watch videos and access all features."
                    on_dismiss=dismiss_prompt
                />
            </Show>
        </div>
    }
}

/// Card that lets signed-in viewers through to playback and prompts
/// everyone else to sign in.
#[component]
fn GatedCard(video: VideoSummary, signed_in: bool, prompt: Callback<i64>) -> impl IntoView {
    if signed_in {
        view! { <VideoCard video=video/> }.into_any()
    } else {
        view! { <VideoCard video=video on_click=prompt/> }.into_any()
    }
}
