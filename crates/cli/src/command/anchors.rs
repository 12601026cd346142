use super::BodyIo;
use anyhow::Result;
use clap::Parser;
use content_pipeline::ContentPipeline;

/// Add anchors to the second-level headings and print the modified body.
#[derive(Parser, Debug, Clone)]
pub struct Anchors {
    #[clap(flatten)]
    io: BodyIo,
}

impl Anchors {
    pub fn run(&self, pipeline: &ContentPipeline) -> Result<()> {
        let body = self.io.read()?;
        self.io.write(&pipeline.inject_anchors(&body))
    }
}
