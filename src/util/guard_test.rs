use super::*;

fn session() -> Session {
    Session {
        token: "tok".to_owned(),
        user_id: 1,
        username: "ada".to_owned(),
    }
}

// =============================================================
// Redirect decision
// =============================================================

#[test]
fn signed_in_context_keeps_the_page() {
    let current = session();
    assert!(!needs_login(Some(&current), Some(&current)));
}

#[test]
fn a_stored_session_covers_the_window_before_the_first_sync() {
    let stored = session();
    assert!(!needs_login(None, Some(&stored)));
}

#[test]
fn a_context_session_alone_is_enough() {
    let current = session();
    assert!(!needs_login(Some(&current), None));
}

#[test]
fn fully_signed_out_redirects() {
    assert!(needs_login(None, None));
}
