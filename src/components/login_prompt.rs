//! Modal prompt shown when a signed-out visitor tries a member action.

use leptos::prelude::*;

/// Sign-in prompt with links to the auth pages. Clicking the backdrop
/// dismisses it.
#[component]
pub fn LoginPromptDialog(
    #[prop(into)] message: String,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_dismiss.run(())>
            <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                <h3 class="dialog__title">"Sign in required"</h3>
                <p class="dialog__body">{message}</p>
                <div class="dialog__actions">
                    <button class="btn dialog__cancel" on:click=move |_| on_dismiss.run(())>
                        "Cancel"
                    </button>
                    <a class="btn dialog__link" href="/login">
                        "Sign in"
                    </a>
                    <a class="btn dialog__link" href="/register">
                        "Register"
                    </a>
                </div>
            </div>
        </div>
    }
}
