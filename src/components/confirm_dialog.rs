//! Modal confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Blocking yes/no dialog. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    #[prop(into, default = "Confirm".to_owned())] confirm_label: String,
    /// Styles the confirm button as destructive.
    #[prop(optional)]
    danger: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                <h3 class="dialog__title">{title}</h3>
                <p class="dialog__body">{body}</p>
                <div class="dialog__actions">
                    <button class="btn dialog__cancel" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn dialog__confirm"
                        class:dialog__confirm--danger=danger
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
