//! Statistics of a post body for display next to the post.
//!
//! Provides word count, character count, heading and image counts, and reading
//! time estimation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utils::{decode_entities, strip_tags, strip_tags_with};

static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h[1-6][\s>]").unwrap());
static IMG_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[\s/>]").unwrap());

/// Words read per minute.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStats {
    /// Total word count of the visible text
    pub words: usize,
    /// Total character count of the visible text (excluding whitespace)
    pub characters: usize,
    /// Total character count of the visible text (including whitespace)
    pub characters_with_spaces: usize,
    /// Number of heading elements of any level
    pub headings: usize,
    /// Number of inline images
    pub images: usize,
    /// Estimated reading time in minutes, rounded up
    pub reading_minutes: usize,
}

/// Calculate statistics of a post body.
///
/// # Example
///
/// ```
/// use content_pipeline::stats::calculate_content_stats;
///
/// let stats = calculate_content_stats("<h2>Hello</h2><p>Hello <b>world</b>!</p>");
/// assert_eq!(stats.words, 3);
/// assert_eq!(stats.headings, 1);
/// assert_eq!(stats.reading_minutes, 1);
/// ```
pub fn calculate_content_stats(body: &str) -> ContentStats {
    let stripped = strip_tags(body);
    let text = decode_entities(&stripped);

    // Tags separate words, `<p>a</p><p>b</p>` has two of them.
    let spaced = strip_tags_with(body, " ");
    let words = decode_entities(&spaced)
        .split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .count();
    let characters_with_spaces = text.chars().count();
    let characters = text.chars().filter(|c| !c.is_whitespace()).count();

    ContentStats {
        words,
        characters,
        characters_with_spaces,
        headings: HEADING_TAG.find_iter(body).count(),
        images: IMG_TAG.find_iter(body).count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}
