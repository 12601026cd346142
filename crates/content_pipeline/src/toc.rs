//! Table of contents of a post body.
//!
//! The entries are recomputed from the body on every read, nothing is persisted.
//! Identical heading text yields identical slugs: links in the table of contents
//! then all point at the first heading with that text.

use serde::{Deserialize, Serialize};
use utils::{escape_html, slugify};

/// Slug used when a heading has no alphanumeric character at all.
const FALLBACK_SLUG: &str = "section";

/// Returns the element id and URL fragment for a heading with the given plain text.
///
/// # Example
///
/// ```
/// use content_pipeline::toc::heading_slug;
///
/// assert_eq!(heading_slug("Getting Started"), "getting-started");
/// assert_eq!(heading_slug("???"), "section");
/// ```
pub fn heading_slug(text: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// A heading found in a post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Plain text content, inline markup collapsed.
    pub text: String,
    /// Heading level, 1 for `h1` up to 6 for `h6`, 0 for non-heading elements.
    pub level: u8,
    /// Id the anchor injector gives to this heading.
    pub slug: String,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        let text = text.into();
        let slug = heading_slug(&text);
        Self { text, level, slug }
    }
}

/// Ordered list of headings of a post body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableOfContents {
    entries: Vec<Heading>,
}

impl TableOfContents {
    /// Builds the table of contents of `body` from the headings matching `tag_level`.
    pub fn from_body(body: &str, tag_level: &str) -> Self {
        crate::heading::extract_heading_entries(body, tag_level)
            .into_iter()
            .collect()
    }

    pub fn entries(&self) -> &[Heading] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain text of every entry, in document order.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|h| h.text.as_str()).collect()
    }

    /// Renders the table of contents as a `<ul class="toc">` list of anchor links.
    ///
    /// An empty table of contents renders to an empty string.
    pub fn render_html(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let mut html = String::from(r#"<ul class="toc">"#);
        for Heading { text, level, slug } in &self.entries {
            html.push_str(&format!(
                r##"<li class="toc-level-{level}"><a href="#{slug}">{}</a></li>"##,
                escape_html(text)
            ));
        }
        html.push_str("</ul>");
        html
    }
}

impl FromIterator<Heading> for TableOfContents {
    fn from_iter<I: IntoIterator<Item = Heading>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TableOfContents {
    type Item = Heading;
    type IntoIter = std::vec::IntoIter<Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_new() {
        let heading = Heading::new("Why `Rust`?", 2);
        assert_eq!(heading.slug, "why-rust");
        assert_eq!(heading.level, 2);
    }

    #[test]
    fn test_from_body() {
        let toc = TableOfContents::from_body(
            "<h2>Intro</h2><p>text</p><h2>Setup &amp; Usage</h2>",
            "h2",
        );
        assert_eq!(toc.len(), 2);
        assert_eq!(toc.titles(), vec!["Intro", "Setup & Usage"]);
        assert_eq!(toc.entries()[1].slug, "setup-usage");
    }

    #[test]
    fn test_render_html() {
        let toc: TableOfContents = [Heading::new("Q&A", 2), Heading::new("Next", 3)]
            .into_iter()
            .collect();
        assert_eq!(
            toc.render_html(),
            r##"<ul class="toc"><li class="toc-level-2"><a href="#q-a">Q&amp;A</a></li><li class="toc-level-3"><a href="#next">Next</a></li></ul>"##
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(TableOfContents::default().render_html(), "");
    }

    #[test]
    fn test_serialize_as_list() {
        let toc: TableOfContents = std::iter::once(Heading::new("Intro", 2)).collect();
        let json = serde_json::to_string(&toc).unwrap();
        assert_eq!(json, r#"[{"text":"Intro","level":2,"slug":"intro"}]"#);
    }
}
