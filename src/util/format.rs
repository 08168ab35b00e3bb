//! Display formatting for counts and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Thousands-grouped rendering of a count, e.g. `1234567` as `1,234,567`.
#[must_use]
pub fn format_count(count: i64) -> String {
    let digits = count.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if count < 0 {
        out.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// View-count caption, singular-aware.
#[must_use]
pub fn views_label(views: i64) -> String {
    if views == 1 {
        "1 view".to_owned()
    } else {
        format!("{} views", format_count(views))
    }
}

/// Calendar-date part of a stored timestamp.
///
/// Upload and activity timestamps arrive in whatever shape the backend's
/// database driver produced (`2024-03-01T09:30:00.000Z`,
/// `2024-03-01 09:30:00`, or a bare date). Anything that does not start
/// with a recognizable date is dropped rather than shown raw.
#[must_use]
pub fn display_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let date = trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _)| date);
    looks_like_date(date).then(|| date.to_owned())
}

fn looks_like_date(value: &str) -> bool {
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    year.len() == 4
        && (1..=2).contains(&month.len())
        && (1..=2).contains(&day.len())
        && [year, month, day]
            .into_iter()
            .all(|part| part.bytes().all(|byte| byte.is_ascii_digit()))
}

/// Activity caption such as `Watched 2024-03-01`, or `None` when the
/// timestamp is missing or unreadable.
#[must_use]
pub fn dated_label(verb: &str, raw: Option<&str>) -> Option<String> {
    raw.and_then(display_date)
        .map(|date| format!("{verb} {date}"))
}
