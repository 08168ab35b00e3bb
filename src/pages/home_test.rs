use super::catalog_heading;

#[test]
fn signed_in_viewers_see_more_videos() {
    assert_eq!(catalog_heading(true), "More Videos");
}

#[test]
fn signed_out_visitors_see_featured_videos() {
    assert_eq!(catalog_heading(false), "Featured Videos");
}
