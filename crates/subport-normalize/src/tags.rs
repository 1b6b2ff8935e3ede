//! Tag field cleaning.
//!
//! Export tools write tag lists with mixed delimiters and stray quoting, e.g.
//! `"Newsletter Subscribers"; "VIP Customers"`. Cleaning turns any of these
//! into the canonical `Newsletter Subscribers, VIP Customers` form.

use subport_model::TagSet;

/// Straight and curly single/double quotes removed before splitting.
pub const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Split points; all three are equally significant.
pub const TAG_DELIMITERS: [char; 3] = [',', ';', '|'];

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a raw tag field into distinct, trimmed tags in first-seen order.
///
/// Blank input, or input made only of delimiters and quotes, yields an empty
/// set. Whitespace inside a tag is kept (collapsed to single spaces).
///
/// # Example
/// ```
/// use subport_normalize::clean_tags;
///
/// let tags = clean_tags("\"Newsletter Subscribers\"; \"VIP Customers\"");
/// assert_eq!(tags.to_joined(), "Newsletter Subscribers, VIP Customers");
/// ```
pub fn clean_tags(raw: &str) -> TagSet {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TagSet::new();
    }
    let unquoted: String = trimmed
        .chars()
        .filter(|ch| !QUOTE_CHARS.contains(ch))
        .collect();
    unquoted
        .split(TAG_DELIMITERS)
        .map(collapse_whitespace)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// [`clean_tags`] serialized with `", "`.
pub fn clean_tag_string(raw: &str) -> String {
    clean_tags(raw).to_joined()
}
