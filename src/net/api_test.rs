use super::*;

// =============================================================
// Bearer header handling
// =============================================================

#[test]
fn bearer_header_prefixes_the_scheme() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn strip_bearer_prefix_removes_the_scheme() {
    assert_eq!(strip_bearer_prefix("Bearer abc123"), "abc123");
}

#[test]
fn strip_bearer_prefix_is_case_insensitive() {
    assert_eq!(strip_bearer_prefix("bearer abc123"), "abc123");
    assert_eq!(strip_bearer_prefix("BEARER abc123"), "abc123");
}

#[test]
fn strip_bearer_prefix_tolerates_surrounding_whitespace() {
    assert_eq!(strip_bearer_prefix("  Bearer   abc123"), "abc123");
}

#[test]
fn strip_bearer_prefix_passes_through_a_bare_token() {
    assert_eq!(strip_bearer_prefix("abc123"), "abc123");
}

#[test]
fn strip_bearer_prefix_leaves_short_values_alone() {
    assert_eq!(strip_bearer_prefix("abc"), "abc");
    assert_eq!(strip_bearer_prefix(""), "");
}

#[test]
fn strip_bearer_prefix_requires_the_trailing_space() {
    // "Bearerabc" is a plain (odd) token, not a scheme-prefixed one.
    assert_eq!(strip_bearer_prefix("Bearerabc123"), "Bearerabc123");
}

// =============================================================
// Auth failure detection
// =============================================================

#[test]
fn unauthorized_and_forbidden_are_auth_failures() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
}

#[test]
fn other_statuses_are_not_auth_failures() {
    assert!(!is_auth_failure(200));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(404));
    assert!(!is_auth_failure(500));
}

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn video_endpoints_embed_the_id() {
    assert_eq!(video_detail_endpoint(42), "/api/video/me/42");
    assert_eq!(video_delete_endpoint(42), "/api/video/delete/42");
}

#[test]
fn profile_endpoint_defaults_to_the_viewer() {
    assert_eq!(profile_endpoint(None), "/api/profile/");
}

#[test]
fn profile_endpoint_targets_a_user_when_asked() {
    assert_eq!(profile_endpoint(Some(7)), "/api/profile?user_id=7");
}
