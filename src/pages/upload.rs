//! Upload page: multipart submission of a video plus its thumbnail.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::util::guard::require_session;

/// Check the upload form before any bytes move.
#[cfg(any(test, feature = "hydrate"))]
fn validate_upload_input(
    title: &str,
    description: &str,
    has_video: bool,
    has_thumbnail: bool,
) -> Result<(), &'static str> {
    if title.is_empty() || description.is_empty() {
        return Err("Enter a title and description.");
    }
    if !has_video || !has_thumbnail {
        return Err("Please select both video and thumbnail files.");
    }
    Ok(())
}

/// First file picked in a file input, if any.
#[cfg(feature = "hydrate")]
fn selected_file(input: &NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let _auth = require_session();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Input>::new();
    let thumbnail_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let alive = crate::util::alive::component_alive();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();

        #[cfg(feature = "hydrate")]
        {
            let video_file = selected_file(&video_ref);
            let thumbnail_file = selected_file(&thumbnail_ref);
            if let Err(message) = validate_upload_input(
                &title_value,
                &description_value,
                video_file.is_some(),
                thumbnail_file.is_some(),
            ) {
                error.set(message.to_owned());
                return;
            }
            let (Some(video_file), Some(thumbnail_file)) = (video_file, thumbnail_file) else {
                return;
            };
            busy.set(true);
            error.set(String::new());
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_video(
                    &title_value,
                    &description_value,
                    &video_file,
                    &thumbnail_file,
                )
                .await;
                match result {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/profile");
                        }
                    }
                    Err(err) => {
                        if alive.load(std::sync::atomic::Ordering::Relaxed) {
                            error.set(err.to_string());
                            busy.set(false);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (title_value, description_value);
    };

    view! {
        <div class="upload-page">
            <h1 class="upload-page__title">"Upload Video"</h1>
            <form class="upload-form" on:submit=on_submit>
                <input
                    class="upload-form__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="upload-form__textarea"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <label class="upload-form__file">
                    "Video file"
                    <input type="file" accept="video/*" node_ref=video_ref/>
                </label>
                <label class="upload-form__file">
                    "Thumbnail image"
                    <input type="file" accept="image/*" node_ref=thumbnail_ref/>
                </label>
                <button class="btn upload-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="upload-page__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
