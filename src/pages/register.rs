//! Registration page with automatic sign-in after account creation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

/// Check the registration form before it goes to the server.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_register_input(&username_value, &email_value, &password_value)
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let establish_and_go_home = |token: String, user: crate::net::types::AuthUser| {
                crate::session::establish(&crate::session::Session {
                    token,
                    user_id: user.id,
                    username: user.username,
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            };
            match crate::net::api::register(&username_value, &email_value, &password_value).await {
                Ok((Some(token), user)) => establish_and_go_home(token, user),
                // Older backends only issue the token at login.
                Ok((None, _)) => {
                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok((token, user)) => establish_and_go_home(token, user),
                        Err(err) => {
                            log::warn!("automatic login after registration failed: {err}");
                            error.set(
                                "Registration succeeded but automatic login failed. \
                                 Please log in manually."
                                    .to_owned(),
                            );
                            busy.set(false);
                        }
                    }
                }
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Join VideoStream"</h1>
                <p class="auth-card__subtitle">
                    "Create your account to start watching and sharing videos"
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a class="auth-card__link" href="/login">
                        "Sign in here"
                    </a>
                </p>
            </div>
        </div>
    }
}
