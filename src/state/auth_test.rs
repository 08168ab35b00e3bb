use super::*;

// =============================================================
// Identity accessors
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.signed_in());
    assert_eq!(state.user_id(), None);
    assert_eq!(state.username(), None);
}

#[test]
fn populated_state_exposes_the_identity() {
    let state = AuthState {
        session: Some(Session {
            token: "tok".to_owned(),
            user_id: 42,
            username: "ada".to_owned(),
        }),
    };
    assert!(state.signed_in());
    assert_eq!(state.user_id(), Some(42));
    assert_eq!(state.username(), Some("ada"));
}
