use crate::anchor::{inject_anchors_with, AnchorOptions};
use crate::assets::{rewrite_content_images, AssetResolver, PublicUrl, UrlFor};
use crate::heading::DEFAULT_HEADING_TAG;
use crate::stats::{calculate_content_stats, ContentStats};
use crate::toc::TableOfContents;
use blog_config::Config;
use serde::Serialize;

/// Output of [`ContentPipeline::process`].
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedContent {
    /// Body ready to be embedded in a page.
    pub html: String,
    /// Headings of the original body.
    pub toc: TableOfContents,
    pub stats: ContentStats,
}

/// Runs every stage over a post body with one immutable configuration.
///
/// The pipeline holds no per-body state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct ContentPipeline<U = PublicUrl> {
    resolver: AssetResolver<U>,
    anchor_options: AnchorOptions,
    toc_tag: String,
    rewrite_images: bool,
}

impl ContentPipeline<PublicUrl> {
    pub fn from_config(config: &Config) -> Self {
        ContentPipeline::new(AssetResolver::from_config(&config.assets))
            .anchor_options((&config.anchor).into())
            .toc_tag(config.toc.heading_tag.as_str())
            .rewrite_images(config.assets.rewrite_content_images)
    }
}

impl<U: UrlFor> ContentPipeline<U> {
    pub fn new(resolver: AssetResolver<U>) -> Self {
        Self {
            resolver,
            anchor_options: AnchorOptions::default(),
            toc_tag: DEFAULT_HEADING_TAG.to_string(),
            rewrite_images: true,
        }
    }

    pub fn anchor_options(mut self, anchor_options: AnchorOptions) -> Self {
        self.anchor_options = anchor_options;
        self
    }

    pub fn toc_tag(mut self, toc_tag: impl Into<String>) -> Self {
        self.toc_tag = toc_tag.into();
        self
    }

    pub fn rewrite_images(mut self, rewrite_images: bool) -> Self {
        self.rewrite_images = rewrite_images;
        self
    }

    pub fn resolver(&self) -> &AssetResolver<U> {
        &self.resolver
    }

    pub fn table_of_contents(&self, body: &str) -> TableOfContents {
        TableOfContents::from_body(body, &self.toc_tag)
    }

    pub fn inject_anchors(&self, body: &str) -> String {
        inject_anchors_with(body, &self.anchor_options)
    }

    /// Returns the renderable body along with its table of contents and statistics.
    ///
    /// The table of contents and the statistics are computed on `body` as stored,
    /// inline images are rewritten before the anchors are injected.
    pub fn process(&self, body: &str) -> ProcessedContent {
        let toc = self.table_of_contents(body);
        let stats = calculate_content_stats(body);

        let html = if self.rewrite_images {
            self.inject_anchors(&rewrite_content_images(body, &self.resolver))
        } else {
            self.inject_anchors(body)
        };

        tracing::debug!(
            toc = toc.len(),
            words = stats.words,
            input_len = body.len(),
            output_len = html.len(),
            "Processed content body"
        );

        ProcessedContent { html, toc, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetPaths;
    use crate::toc::Heading;

    const BODY: &str = r#"<p>Welcome</p>
<h2>Getting Started</h2>
<p><img src="storage/assets/images/uploads/setup.png" alt="setup"></p>
<h2>Next <em>Steps</em></h2>"#;

    fn pipeline() -> ContentPipeline {
        let resolver =
            AssetResolver::new(AssetPaths::default(), PublicUrl::new("https://blog.example.com"));
        ContentPipeline::new(resolver)
    }

    #[test]
    fn test_process() {
        let processed = pipeline().process(BODY);

        assert_eq!(
            processed.toc.entries(),
            &[Heading::new("Getting Started", 2), Heading::new("Next Steps", 2)]
        );
        assert!(processed.html.contains(r#"<h2 id="getting-started">"#));
        assert!(processed.html.contains(r##"href="#next-steps""##));
        assert!(processed
            .html
            .contains(r#"src="https://blog.example.com/assets/images/uploads/setup.png""#));
        assert_eq!(processed.stats.headings, 2);
        assert_eq!(processed.stats.images, 1);
    }

    #[test]
    fn test_toc_slugs_match_injected_ids() {
        let pipeline = pipeline();
        let entities = "<h2>What&rsquo;s New</h2><h2>Caf&eacute; &amp; Bar</h2>\
            <h2>Before &mdash; After</h2><h2>Wait&hellip;&nbsp;what</h2><h2>&#x201C;Quoted&#8221;</h2>";

        for body in [BODY, entities] {
            let processed = pipeline.process(body);
            assert_eq!(processed.toc.len(), processed.stats.headings);
            for heading in processed.toc {
                assert!(
                    processed.html.contains(&format!(r#"id="{}""#, heading.slug)),
                    "toc link #{} has no target",
                    heading.slug
                );
            }
        }
    }

    #[test]
    fn test_without_image_rewriting() {
        let processed = pipeline().rewrite_images(false).process(BODY);
        assert!(processed
            .html
            .contains(r#"src="storage/assets/images/uploads/setup.png""#));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.assets.base_url = "https://cdn.example.com/".into();
        config.toc.heading_tag = "h3".into();
        config.anchor.link_class = "anchor".into();

        let pipeline = ContentPipeline::from_config(&config);
        let processed = pipeline.process("<h2>Two</h2><h3>Three</h3><img src=\"x.png\">");

        assert_eq!(processed.toc.titles(), vec!["Three"]);
        assert!(processed.html.contains(r#"class="anchor""#));
        assert!(processed
            .html
            .contains("https://cdn.example.com/assets/images/uploads/x.png"));
    }

    #[test]
    fn test_process_empty_body() {
        let processed = pipeline().process("");
        assert_eq!(processed.html, "");
        assert!(processed.toc.is_empty());
        assert_eq!(processed.stats, ContentStats::default());
    }

    #[test]
    fn test_pipeline_is_shareable_across_threads() {
        let pipeline = std::sync::Arc::new(pipeline());
        let handles = (0..4)
            .map(|i| {
                let pipeline = pipeline.clone();
                std::thread::spawn(move || pipeline.process(&format!("<h2>Part {i}</h2>")))
            })
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let processed = handle.join().unwrap();
            assert_eq!(processed.toc.entries()[0].slug, format!("part-{i}"));
        }
    }
}
