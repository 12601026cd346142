//! Anchor link injection for second-level headings.
//!
//! Every `<h2>` of a body is rewritten to
//!
//! ```html
//! <h2 id="{slug}">{text} <a href="#{slug}" class="heading-anchor" aria-hidden="true">{label}</a></h2>
//! ```
//!
//! Headings are matched with a pattern rather than parsed, the rest of the body
//! is left byte-for-byte unchanged.
//!
//! Known limitations:
//! - Two headings with the same text get the same id.
//! - Attributes already present on a heading, an author supplied `id` included,
//!   are dropped. Running the injector on its own output rewrites every heading
//!   again and folds a textual label into the heading text.

use crate::heading::fragment_text;
use crate::toc::heading_slug;
use blog_config::AnchorConfig;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use utils::{collapse_whitespace, escape_html, strip_tags};

static H2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<h2(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?>(.*?)</h2\s*>"#).unwrap());

/// How the injected anchor link looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOptions {
    /// Class of the `<a>` element.
    pub link_class: String,
    /// Inner markup of the `<a>` element, inserted as is.
    pub link_label: String,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            link_class: "heading-anchor".into(),
            link_label: String::new(),
        }
    }
}

impl From<&AnchorConfig> for AnchorOptions {
    fn from(config: &AnchorConfig) -> Self {
        Self {
            link_class: config.link_class.clone(),
            link_label: config.link_label.clone(),
        }
    }
}

/// Adds a slug id and an anchor link to every `<h2>` in `body`, with the default options.
///
/// # Example
///
/// ```
/// use content_pipeline::anchor::inject_anchors;
///
/// assert_eq!(
///     inject_anchors("<h2>Getting Started</h2>"),
///     r##"<h2 id="getting-started">Getting Started <a href="#getting-started" class="heading-anchor" aria-hidden="true"></a></h2>"##
/// );
/// ```
pub fn inject_anchors(body: &str) -> String {
    inject_anchors_with(body, &AnchorOptions::default())
}

/// Adds a slug id and an anchor link to every `<h2>` in `body`.
///
/// Returns a copy of `body` identical to it if there is no `<h2>`.
pub fn inject_anchors_with(body: &str, options: &AnchorOptions) -> String {
    let link_class = escape_html(&options.link_class);
    let link_label = &options.link_label;

    let mut count = 0usize;
    let output = H2.replace_all(body, |caps: &Captures| {
        count += 1;

        let text = collapse_whitespace(&strip_tags(&caps[1]));
        // Must match the slug of the table of contents entry.
        let slug = heading_slug(&fragment_text(&caps[1]));

        format!(
            r##"<h2 id="{slug}">{text} <a href="#{slug}" class="{link_class}" aria-hidden="true">{link_label}</a></h2>"##
        )
    });

    tracing::debug!(headings = count, "Injected heading anchors");

    output.into_owned()
}
