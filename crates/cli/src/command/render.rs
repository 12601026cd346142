use super::BodyIo;
use anyhow::Result;
use clap::Parser;
use content_pipeline::ContentPipeline;

/// Rewrite the inline images and add the heading anchors of a post body.
#[derive(Parser, Debug, Clone)]
pub struct Render {
    #[clap(flatten)]
    io: BodyIo,

    /// Print the body, the table of contents and the statistics as JSON.
    #[clap(long, conflicts_with = "with_toc")]
    json: bool,

    /// Prepend the table of contents to the rendered body.
    #[clap(long)]
    with_toc: bool,
}

impl Render {
    pub fn run(&self, pipeline: &ContentPipeline) -> Result<()> {
        let body = self.io.read()?;
        let processed = pipeline.process(&body);

        if self.json {
            self.io.write_json(&processed)
        } else if self.with_toc {
            let toc = processed.toc.render_html();
            self.io.write(&format!("{toc}\n{}", processed.html))
        } else {
            self.io.write(&processed.html)
        }
    }
}
