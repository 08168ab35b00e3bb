use super::*;

// =============================================================
// Link sets
// =============================================================

#[test]
fn signed_out_visitors_get_auth_links() {
    let hrefs: Vec<&str> = nav_links(false).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/login", "/register"]);
}

#[test]
fn signed_in_users_get_section_links() {
    let hrefs: Vec<&str> = nav_links(true).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/history", "/liked", "/upload", "/profile"]);
}

#[test]
fn every_link_has_a_label() {
    for signed_in in [false, true] {
        for (_, label) in nav_links(signed_in) {
            assert!(!label.is_empty());
        }
    }
}
