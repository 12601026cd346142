use super::BodyIo;
use anyhow::Result;
use clap::Parser;
use content_pipeline::{ContentPipeline, TableOfContents};

/// Print the headings of a post body, as JSON by default.
#[derive(Parser, Debug, Clone)]
pub struct Toc {
    #[clap(flatten)]
    io: BodyIo,

    /// Heading selector, overrides the `toc.heading-tag` config.
    #[clap(long)]
    tag: Option<String>,

    /// Render the table of contents as a HTML list of anchor links.
    #[clap(long)]
    html: bool,
}

impl Toc {
    pub fn run(&self, pipeline: &ContentPipeline) -> Result<()> {
        let body = self.io.read()?;

        let toc = match &self.tag {
            Some(tag) => TableOfContents::from_body(&body, tag),
            None => pipeline.table_of_contents(&body),
        };

        if self.html {
            self.io.write(&toc.render_html())
        } else {
            self.io.write_json(&toc)
        }
    }
}
