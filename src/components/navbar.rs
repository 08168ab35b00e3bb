//! Top navigation bar with brand link, section links, and session controls.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Section links for the current auth state.
fn nav_links(signed_in: bool) -> &'static [(&'static str, &'static str)] {
    if signed_in {
        &[
            ("/history", "History"),
            ("/liked", "Liked Videos"),
            ("/upload", "Upload"),
            ("/profile", "Profile"),
        ]
    } else {
        &[("/login", "Login"), ("/register", "Register")]
    }
}

/// Top navigation bar.
///
/// Reads the live auth context, so the links and the username flip the
/// moment a session is established or cleared anywhere in the app.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let username = move || {
        auth.get()
            .username()
            .map(str::to_owned)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::session::clear();
            // Hard navigation for a clean slate on the next page.
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "VideoStream"
            </a>
            <span class="navbar__spacer"></span>
            {move || {
                nav_links(auth.get().signed_in())
                    .iter()
                    .copied()
                    .map(|(href, label)| {
                        view! {
                            <a href=href class="navbar__link">
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || auth.get().signed_in()>
                <span class="navbar__user">{username}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
