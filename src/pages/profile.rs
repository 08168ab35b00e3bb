//! Profile page: identity header, video tabs, and owner-only management.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves both `/profile` and `/profile/:id`. The routed
//! target decides which payloads load and which controls render: another
//! user's page is just their header and uploads, the viewer's own page adds
//! the private history and liked tabs, picture management, video deletion,
//! and account deletion. Each tab keeps its own list, so the three owner
//! fetches can land in any order without overwriting each other.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_params_map;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::ProfilePayload;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::video_card::VideoCard;
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileState, ProfileTab};
use crate::util::guard::require_session;
use crate::util::{format, media};

/// Route param as a profile user id; `None` covers absent and malformed
/// values, which both mean "the viewer's own profile".
#[cfg(any(test, feature = "hydrate"))]
fn parse_route_user(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id| *id > 0)
}

/// Whether the routed profile belongs to the signed-in viewer. An explicit
/// id still counts as "own" when it matches the viewer, so self-links from
/// comments get the full owner view.
fn is_own_profile(target: Option<i64>, viewer: Option<i64>) -> bool {
    match target {
        None => true,
        Some(id) => viewer == Some(id),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = require_session();
    let state = RwSignal::new(ProfileState {
        loading: true,
        ..ProfileState::default()
    });
    let route_target = RwSignal::new(None::<i64>);

    let own = Memo::new(move |_| {
        is_own_profile(route_target.get(), auth.with(AuthState::user_id))
    });

    #[cfg(feature = "hydrate")]
    let alive = StoredValue::new(crate::util::alive::component_alive());

    #[cfg(feature = "hydrate")]
    {
        let params = use_params_map();
        // `None` until the first run; distinguishes "nothing loaded" from
        // "loaded the own-profile route".
        let loaded_for = RwSignal::new(None::<Option<i64>>);
        Effect::new(move || {
            let target = parse_route_user(params.read().get("id").as_deref());
            if loaded_for.get_untracked() == Some(target) {
                return;
            }
            loaded_for.set(Some(target));
            route_target.set(target);
            state.set(ProfileState {
                loading: true,
                ..ProfileState::default()
            });
            let own_profile =
                is_own_profile(target, crate::session::current().map(|session| session.user_id));
            load_profile(state, target, own_profile, alive.get_value());
        });
    }

    let pending_delete = RwSignal::new(None::<i64>);
    let confirm_account_delete = RwSignal::new(false);

    let on_delete_request = Callback::new(move |video_id: i64| pending_delete.set(Some(video_id)));
    let cancel_video_delete = Callback::new(move |()| pending_delete.set(None));
    let cancel_account_delete = Callback::new(move |()| confirm_account_delete.set(false));

    let on_video_delete = Callback::new(move |()| {
        let Some(video_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        submit_video_delete(state, video_id, alive.get_value());
        #[cfg(not(feature = "hydrate"))]
        let _ = video_id;
    });

    let on_account_delete = Callback::new(move |()| {
        confirm_account_delete.set(false);
        #[cfg(feature = "hydrate")]
        submit_account_delete(state, alive.get_value());
    });

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        if let Some(file) = picture_from_event(&ev) {
            submit_picture(state, file, false, alive.get_value());
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };
    let on_background_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        if let Some(file) = picture_from_event(&ev) {
            submit_picture(state, file, true, alive.get_value());
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="profile-page">
            <Show when=move || state.get().loading>
                <p class="profile-page__loading">"Loading..."</p>
            </Show>
            <Show when=move || state.with(|profile| profile.error.is_some())>
                <p class="profile-page__error">
                    {move || state.with(|profile| profile.error.clone()).unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || state.with(|profile| profile.profile.is_some())>
                <header
                    class="profile-page__header"
                    style:background-image=move || {
                        state
                            .with(|profile| {
                                profile
                                    .profile
                                    .as_ref()
                                    .and_then(|user| {
                                        user.background_pic_url
                                            .as_deref()
                                            .and_then(media::background_pic_url)
                                    })
                            })
                            .map(|url| format!("url({url})"))
                            .unwrap_or_default()
                    }
                >
                    {move || {
                        state
                            .with(|profile| {
                                profile
                                    .profile
                                    .as_ref()
                                    .map(|user| {
                                        (
                                            user.profile_pic_url
                                                .as_deref()
                                                .and_then(media::profile_pic_url),
                                            user.username.clone(),
                                            user.created_at.clone(),
                                        )
                                    })
                            })
                            .map(|(avatar, username, created_at)| {
                                let member_since = format::dated_label(
                                    "Member since",
                                    created_at.as_deref(),
                                );
                                view! {
                                    <div class="profile-page__identity">
                                        {avatar
                                            .map(|src| {
                                                view! {
                                                    <img
                                                        class="profile-page__avatar"
                                                        src=src
                                                        alt=""
                                                    />
                                                }
                                            })}
                                        <div class="profile-page__names">
                                            <h1 class="profile-page__username">{username}</h1>
                                            {member_since
                                                .map(|line| {
                                                    view! {
                                                        <p class="profile-page__member-since">
                                                            {line}
                                                        </p>
                                                    }
                                                })}
                                        </div>
                                    </div>
                                }
                            })
                    }}
                    <Show when=move || own.get()>
                        <div class="profile-page__pic-controls">
                            <label class="btn profile-page__pic-button">
                                "Change Picture"
                                <input
                                    class="profile-page__pic-input"
                                    type="file"
                                    accept="image/*"
                                    on:change=on_avatar_change
                                />
                            </label>
                            <label class="btn profile-page__pic-button">
                                "Change Background"
                                <input
                                    class="profile-page__pic-input"
                                    type="file"
                                    accept="image/*"
                                    on:change=on_background_change
                                />
                            </label>
                        </div>
                    </Show>
                </header>

                <nav class="profile-page__tabs">
                    {move || {
                        let own_profile = own.get();
                        ProfileTab::ALL
                            .into_iter()
                            .filter(|tab| tab.visible(own_profile))
                            .map(|tab| {
                                view! {
                                    <button
                                        class="profile-page__tab"
                                        class:profile-page__tab--active=move || {
                                            state.with(|profile| profile.tab == tab)
                                        }
                                        on:click=move |_| {
                                            state.update(|profile| profile.tab = tab)
                                        }
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>

                <div class="video-grid">
                    {move || {
                        let snapshot = state.get();
                        let deletable = own.get() && snapshot.tab == ProfileTab::Videos;
                        snapshot
                            .active_list()
                            .iter()
                            .cloned()
                            .map(|video| {
                                let caption = match snapshot.tab {
                                    ProfileTab::Videos => None,
                                    ProfileTab::History => format::dated_label(
                                        "Watched",
                                        video.watched_at.as_deref(),
                                    ),
                                    ProfileTab::Liked => format::dated_label(
                                        "Liked",
                                        video.liked_at.as_deref(),
                                    ),
                                };
                                if deletable {
                                    view! {
                                        <VideoCard
                                            video=video
                                            caption=caption
                                            on_delete=on_delete_request
                                        />
                                    }
                                        .into_any()
                                } else {
                                    view! { <VideoCard video=video caption=caption/> }
                                        .into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || own.get()>
                    <div class="profile-page__danger">
                        <button
                            class="btn profile-page__delete-account"
                            on:click=move |_| confirm_account_delete.set(true)
                        >
                            "Delete Account"
                        </button>
                    </div>
                </Show>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete video"
                    body="Are you sure you want to delete this video?"
                    confirm_label="Delete"
                    danger=true
                    on_confirm=on_video_delete
                    on_cancel=cancel_video_delete
                />
            </Show>
            <Show when=move || confirm_account_delete.get()>
                <ConfirmDialog
                    title="Delete account"
                    body="Are you sure you want to delete your account? This action cannot be undone."
                    confirm_label="Delete Account"
                    danger=true
                    on_confirm=on_account_delete
                    on_cancel=cancel_account_delete
                />
            </Show>
        </div>
    }
}

/// Load the routed profile. The owner's page pulls the profile payload and
/// both private lists together; everyone else's pulls just the payload.
#[cfg(feature = "hydrate")]
fn load_profile(
    state: RwSignal<ProfileState>,
    target: Option<i64>,
    own_profile: bool,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        if own_profile {
            let (profile_result, history_result, liked_result) = futures::join!(
                crate::net::api::fetch_profile(None),
                crate::net::api::fetch_history(),
                crate::net::api::fetch_liked(),
            );
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            apply_profile(state, profile_result);
            match history_result {
                Ok(items) => state.update(|profile| profile.history = items),
                Err(err) => log::warn!("history load failed: {err}"),
            }
            match liked_result {
                Ok(items) => state.update(|profile| profile.liked = items),
                Err(err) => log::warn!("liked-videos load failed: {err}"),
            }
        } else {
            let result = crate::net::api::fetch_profile(target).await;
            if !alive.load(Ordering::Relaxed) {
                return;
            }
            apply_profile(state, result);
        }
    });
}

/// Install a profile payload, treating an empty `user_detail` as a missing
/// account rather than a decoding success.
#[cfg(feature = "hydrate")]
fn apply_profile(state: RwSignal<ProfileState>, result: Result<ProfilePayload, ApiError>) {
    match result {
        Ok(payload) => state.update(|profile| {
            profile.loading = false;
            match payload.user_detail.into_iter().next() {
                Some(user) => {
                    profile.profile = Some(user);
                    profile.videos = payload.user_videos;
                    profile.error = None;
                }
                None => {
                    profile.profile = None;
                    profile.videos = Vec::new();
                    profile.error = Some("Profile not found.".to_owned());
                }
            }
        }),
        Err(ApiError::Auth) => {}
        Err(err) => {
            log::warn!("profile load failed: {err}");
            state.update(|profile| {
                profile.loading = false;
                profile.error = Some(err.to_string());
            });
        }
    }
}

/// Refresh the owner's payload after a mutation, leaving the current tab
/// and the private lists as they are.
#[cfg(feature = "hydrate")]
fn reload_own_profile(state: RwSignal<ProfileState>, alive: Arc<AtomicBool>) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_profile(None).await;
        if alive.load(Ordering::Relaxed) {
            apply_profile(state, result);
        }
    });
}

#[cfg(feature = "hydrate")]
fn submit_video_delete(state: RwSignal<ProfileState>, video_id: i64, alive: Arc<AtomicBool>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_video(video_id).await {
            Ok(()) => {
                if alive.load(Ordering::Relaxed) {
                    reload_own_profile(state, alive);
                }
            }
            Err(ApiError::Auth) => {}
            Err(err) => {
                log::warn!("video delete failed: {err}");
                if alive.load(Ordering::Relaxed) {
                    state.update(|profile| profile.error = Some(err.to_string()));
                }
            }
        }
    });
}

/// Delete the signed-in account, then clear the session and leave. The
/// propagator notifies every subscribed view before the redirect lands.
#[cfg(feature = "hydrate")]
fn submit_account_delete(state: RwSignal<ProfileState>, alive: Arc<AtomicBool>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_account().await {
            Ok(()) => {
                crate::session::clear();
                crate::util::guard::redirect_to_login();
            }
            Err(ApiError::Auth) => {}
            Err(err) => {
                log::warn!("account delete failed: {err}");
                if alive.load(Ordering::Relaxed) {
                    state.update(|profile| profile.error = Some(err.to_string()));
                }
            }
        }
    });
}

/// File picked in a change event's input, if any.
#[cfg(feature = "hydrate")]
fn picture_from_event(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Upload a replacement avatar or background, then refresh the header.
/// Failures are only logged, matching the other picture flows.
#[cfg(feature = "hydrate")]
fn submit_picture(
    state: RwSignal<ProfileState>,
    file: web_sys::File,
    background: bool,
    alive: Arc<AtomicBool>,
) {
    leptos::task::spawn_local(async move {
        let result = if background {
            crate::net::api::update_background_pic(&file).await
        } else {
            crate::net::api::update_profile_pic(&file).await
        };
        match result {
            Ok(()) => {
                if alive.load(Ordering::Relaxed) {
                    reload_own_profile(state, alive);
                }
            }
            Err(ApiError::Auth) => {}
            Err(err) => log::warn!("picture update failed: {err}"),
        }
    });
}
