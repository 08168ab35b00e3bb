//! Media URL normalization.
//!
//! DESIGN
//! ======
//! The database stores whatever path the upload pipeline happened to write:
//! bare filenames, `uploads/...` relative paths, absolute server paths with
//! either slash flavor, or full remote URLs for seeded demo rows. The
//! static file server only ever exposes flat directories, so everything
//! local is reduced to its basename and re-rooted under the matching mount.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Public mount for thumbnail images.
const THUMBNAIL_MOUNT: &str = "thumbnails";
/// Public mount for avatar images.
const PROFILE_PIC_MOUNT: &str = "profile_pics";
/// Public mount for profile banner images.
const BACKGROUND_PIC_MOUNT: &str = "background_pics";

fn is_remote(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Final path component of a stored media path, tolerating both slash
/// flavors. `None` when there is nothing usable.
fn basename(path: &str) -> Option<&str> {
    path.trim()
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
}

fn mounted_url(mount: &str, stored: &str) -> Option<String> {
    let trimmed = stored.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_remote(trimmed) {
        return Some(trimmed.to_owned());
    }
    basename(trimmed).map(|name| format!("/{mount}/{name}"))
}

/// Browser-loadable URL for a stored thumbnail path.
#[must_use]
pub fn thumbnail_url(stored: &str) -> Option<String> {
    mounted_url(THUMBNAIL_MOUNT, stored)
}

/// Browser-loadable URL for a stored avatar path.
#[must_use]
pub fn profile_pic_url(stored: &str) -> Option<String> {
    mounted_url(PROFILE_PIC_MOUNT, stored)
}

/// Browser-loadable URL for a stored profile banner path.
#[must_use]
pub fn background_pic_url(stored: &str) -> Option<String> {
    mounted_url(BACKGROUND_PIC_MOUNT, stored)
}

/// Browser-loadable URL for a stored video path.
///
/// Video paths are served from wherever they were written rather than a
/// flat mount, so only the leading slash is normalized.
#[must_use]
pub fn video_url(stored: &str) -> Option<String> {
    let trimmed = stored.trim();
    if trimmed.is_empty() {
        None
    } else if is_remote(trimmed) || trimmed.starts_with('/') {
        Some(trimmed.to_owned())
    } else {
        Some(format!("/{trimmed}"))
    }
}
