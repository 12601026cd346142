//! Plain-text helpers for markup produced by the rich-text editor.

use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;

/// Converts text to a URL-safe slug usable as an HTML id and URL fragment.
///
/// 1. Convert to lowercase
/// 2. Treat every run of non-alphanumeric characters as a single separator
/// 3. Join the remaining words with hyphens, so there are never leading or
///    trailing hyphens
///
/// # Example
///
/// ```
/// use utils::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("  API Reference (v2)!"), "api-reference-v2");
/// ```
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|</?[a-zA-Z!/][^>]*>").unwrap());

/// Removes every tag and comment from `markup`, keeping the text between them.
///
/// Tolerates unbalanced markup: a dangling `<` without a closing `>` is kept as text.
pub fn strip_tags(markup: &str) -> Cow<'_, str> {
    strip_tags_with(markup, "")
}

/// Replaces every tag and comment in `markup` with `replacement`.
pub fn strip_tags_with<'a>(markup: &'a str, replacement: &str) -> Cow<'a, str> {
    TAG.replace_all(markup, NoExpand(replacement))
}

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Decodes the character references an editor commonly emits.
///
/// Unknown named references are left untouched.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        let decoded = if let Some(num) = name.strip_prefix('#') {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => num.parse::<u32>().ok(),
            };
            code.and_then(char::from_u32)
        } else {
            match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ => None,
            }
        };

        decoded.map_or_else(|| caps[0].to_string(), String::from)
    })
}

/// Escapes the characters with a special meaning in HTML text and attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Trims `text` and collapses every inner whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test-123"), "test-123");
        assert_eq!(slugify("foo_bar"), "foo-bar");
        assert_eq!(slugify("Multiple   Spaces"), "multiple-spaces");
        assert_eq!(slugify("--Leading and trailing--"), "leading-and-trailing");
        assert_eq!(slugify("Café Société"), "café-société");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        assert_eq!(slugify("Why Rust?"), slugify("Why Rust?"));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<strong>Bold</strong> move"), "Bold move");
        assert_eq!(strip_tags("a <!-- note --> b"), "a  b");
        assert_eq!(strip_tags("<em>unclosed"), "unclosed");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(strip_tags_with("<p>a</p><p>b</p>", " "), " a  b ");
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("Q&amp;A"), "Q&A");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("&#39;quoted&#x27;"), "'quoted'");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
        assert_eq!(decode_entities("AT&T"), "AT&T");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Getting \n  Started "), "Getting Started");
        assert_eq!(collapse_whitespace(""), "");
    }
}
