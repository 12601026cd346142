//! Image path rewriting for post bodies.
//!
//! Bodies store inline images with whatever path the editor produced, they are
//! rewritten to public URLs before rendering.

use super::{AssetResolver, UrlFor};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use utils::{decode_entities, escape_html};

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b([^>]*?)\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)')([^>]*)>"#).unwrap()
});

/// Rewrites the `src` of every `<img>` in `html` with [`AssetResolver::resolve_content_image_url`].
///
/// `data:` URIs and protocol-relative URLs are left unchanged, as are all the
/// other attributes of the tag.
///
/// # Example
///
/// ```
/// use content_pipeline::{rewrite_content_images, AssetPaths, AssetResolver, PublicUrl};
///
/// let resolver = AssetResolver::new(AssetPaths::default(), PublicUrl::new("https://blog.example.com"));
/// let html = r#"<img alt="cat" src="cat.png">"#;
/// assert_eq!(
///     rewrite_content_images(html, &resolver),
///     r#"<img alt="cat" src="https://blog.example.com/assets/images/uploads/cat.png">"#
/// );
/// ```
pub fn rewrite_content_images<U: UrlFor>(html: &str, resolver: &AssetResolver<U>) -> String {
    IMG_SRC
        .replace_all(html, |caps: &Captures| {
            let before = &caps[1];
            let src = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            let after = &caps[4];

            let src = decode_entities(src);
            let src = src.trim();

            if src.is_empty() || src.starts_with("data:") || src.starts_with("//") {
                return caps[0].to_string();
            }

            let url = resolver.resolve_content_image_url(src);

            format!(r#"<img{before} src="{}"{after}>"#, escape_html(&url))
        })
        .into_owned()
}
