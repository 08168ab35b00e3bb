//! Comment list and composer for the watch page.
//!
//! DESIGN
//! ======
//! The backend keeps one comment per user per video and upserts on post, so
//! "editing" is just reloading your existing text into the composer and
//! submitting again. The composer is hidden behind a sign-in link for
//! signed-out viewers.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use leptos::prelude::*;

use crate::net::types::Comment;
use crate::util::{format, media};

/// Whether the viewer may edit a comment.
fn can_edit(viewer_id: Option<i64>, author_id: i64) -> bool {
    viewer_id == Some(author_id)
}

/// Author line for a comment, with the date when it is readable.
fn byline(username: &str, posted_at: Option<&str>) -> String {
    match posted_at.and_then(format::display_date) {
        Some(date) => format!("{username} · {date}"),
        None => username.to_owned(),
    }
}

/// Comment list with a composer for signed-in viewers.
///
/// Takes signals rather than values so a background re-fetch of the thread
/// never remounts the composer and loses a half-typed draft.
#[component]
pub fn CommentList(
    comments: Signal<Vec<Comment>>,
    viewer_id: Signal<Option<i64>>,
    /// Receives the trimmed comment text on submit. Posting again replaces
    /// the viewer's existing comment.
    on_submit: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        on_submit.run(text.to_owned());
        draft.set(String::new());
    };

    let heading = move || {
        let count = comments.with(Vec::len);
        if count == 1 {
            "1 comment".to_owned()
        } else {
            format!("{count} comments")
        }
    };

    view! {
        <section class="comments">
            <h3 class="comments__heading">{heading}</h3>
            <Show
                when=move || viewer_id.get().is_some()
                fallback=|| {
                    view! {
                        <p class="comments__signin">
                            <a href="/login">"Sign in"</a>
                            " to join the conversation."
                        </p>
                    }
                }
            >
                <form class="comments__form" on:submit=submit>
                    <input
                        class="comments__input"
                        type="text"
                        placeholder="Add a comment"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn comments__post" type="submit">
                        "Comment"
                    </button>
                </form>
            </Show>
            <ul class="comments__list">
                {move || {
                    let viewer = viewer_id.get();
                    comments
                        .get()
                        .into_iter()
                        .map(|comment| {
                            let editable = can_edit(viewer, comment.user_id);
                            let line = byline(&comment.username, comment.upload_date.as_deref());
                            let avatar = comment
                                .profile_pic_url
                                .as_deref()
                                .and_then(media::profile_pic_url);
                            let original = StoredValue::new(comment.comment.clone());
                            let author_href = format!("/profile/{}", comment.user_id);
                            view! {
                                <li class="comments__item">
                                    <a class="comments__author" href=author_href>
                                        {avatar
                                            .map(|src| {
                                                view! {
                                                    <img class="comments__avatar" src=src alt="" />
                                                }
                                            })}
                                        <span class="comments__byline">{line}</span>
                                    </a>
                                    <div class="comments__body">
                                        <p class="comments__text">{comment.comment}</p>
                                    </div>
                                    <Show when=move || editable>
                                        <button
                                            class="comments__edit"
                                            on:click=move |_| draft.set(original.get_value())
                                            title="Edit your comment"
                                        >
                                            "Edit"
                                        </button>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
