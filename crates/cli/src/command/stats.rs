use super::BodyIo;
use anyhow::Result;
use clap::Parser;
use content_pipeline::calculate_content_stats;

/// Print the statistics of a post body as JSON.
#[derive(Parser, Debug, Clone)]
pub struct Stats {
    #[clap(flatten)]
    io: BodyIo,
}

impl Stats {
    pub fn run(&self) -> Result<()> {
        let body = self.io.read()?;
        self.io.write_json(&calculate_content_stats(&body))
    }
}
