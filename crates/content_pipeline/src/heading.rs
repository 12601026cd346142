//! Heading extraction from stored post bodies.
//!
//! Bodies come from a rich-text editor and are not guaranteed to be well-formed,
//! they are parsed with the HTML5 fragment parsing algorithm which recovers
//! from any input instead of failing.

use crate::toc::Heading;
use scraper::{ElementRef, Html, Selector};
use utils::collapse_whitespace;

/// Tag level extracted when none is specified.
pub const DEFAULT_HEADING_TAG: &str = "h2";

/// Extracts the plain text of every element matching `tag_level`, in document order.
///
/// `tag_level` is a tag name such as `h2`, any CSS selector is accepted. Inline
/// markup inside a heading is collapsed to its text. Returns an empty list for an
/// empty body or an invalid selector.
///
/// # Example
///
/// ```
/// use content_pipeline::heading::extract_headings;
///
/// let body = "<h2>One</h2><p>text<h2>Two <em>and</em> a half";
/// assert_eq!(extract_headings(body, "h2"), vec!["One", "Two and a half"]);
/// ```
pub fn extract_headings(body: &str, tag_level: &str) -> Vec<String> {
    select_headings(body, tag_level, |element| heading_text(&element))
}

/// Same as [`extract_headings`] with the [`DEFAULT_HEADING_TAG`].
pub fn extract_h2_headings(body: &str) -> Vec<String> {
    extract_headings(body, DEFAULT_HEADING_TAG)
}

/// Extracts the matching headings along with their level and slug.
pub fn extract_heading_entries(body: &str, tag_level: &str) -> Vec<Heading> {
    select_headings(body, tag_level, |element| {
        Heading::new(heading_text(&element), heading_level(element.value().name()))
    })
}

fn select_headings<T>(body: &str, tag_level: &str, f: impl FnMut(ElementRef<'_>) -> T) -> Vec<T> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let selector = match Selector::parse(&normalize_selector(tag_level)) {
        Ok(selector) => selector,
        Err(err) => {
            tracing::warn!(tag_level, "Invalid heading selector: {err:?}");
            return Vec::new();
        }
    };

    let fragment = Html::parse_fragment(body);
    let headings = fragment.select(&selector).map(f).collect::<Vec<_>>();

    tracing::debug!(
        tag_level,
        body_len = body.len(),
        headings = headings.len(),
        "Extracted headings"
    );

    headings
}

/// Lowercases the leading tag name of `tag_level`, classes and ids are kept as given.
fn normalize_selector(tag_level: &str) -> String {
    let tag_level = tag_level.trim();
    let name_len = tag_level
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(tag_level.len());
    let (name, rest) = tag_level.split_at(name_len);
    format!("{}{rest}", name.to_ascii_lowercase())
}

fn heading_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Text content of a markup fragment, decoded and collapsed the same way as
/// the extracted headings.
pub(crate) fn fragment_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    heading_text(&fragment.root_element())
}

fn heading_level(tag_name: &str) -> u8 {
    match tag_name.as_bytes() {
        [b'h', level @ b'1'..=b'6'] => level - b'0',
        _ => 0,
    }
}
