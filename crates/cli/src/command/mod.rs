pub mod anchors;
pub mod image;
pub mod render;
pub mod stats;
pub mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Input and output of the commands processing a post body.
#[derive(Parser, Debug, Clone)]
pub struct BodyIo {
    /// Read the post body from a file instead of stdin.
    #[clap(long, value_parser)]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout.
    #[clap(long, value_parser)]
    output: Option<PathBuf>,
}

impl BodyIo {
    pub fn read(&self) -> Result<String> {
        utils::read_input(self.input.as_deref()).with_context(|| match &self.input {
            Some(path) => format!("failed to read {}", path.display()),
            None => "failed to read stdin".to_string(),
        })
    }

    pub fn write(&self, content: &str) -> Result<()> {
        utils::write_output(self.output.as_deref(), content).with_context(|| match &self.output {
            Some(path) => format!("failed to write {}", path.display()),
            None => "failed to write stdout".to_string(),
        })
    }

    pub fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        self.write(&serde_json::to_string_pretty(value)?)
    }
}
