use crate::{command, logging};
use anyhow::Result;
use clap::Parser;
use content_pipeline::ContentPipeline;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub enum RunCmd {
    /// Print the table of contents of a post body.
    #[clap(name = "toc")]
    Toc(command::toc::Toc),
    /// Add slug ids and anchor links to the second-level headings of a post body.
    #[clap(name = "anchors")]
    Anchors(command::anchors::Anchors),
    /// Run the whole pipeline over a post body.
    #[clap(name = "render")]
    Render(command::render::Render),
    /// Print the word count and reading time of a post body.
    #[clap(name = "stats")]
    Stats(command::stats::Stats),
    /// Resolve a stored image reference to its public URL.
    #[clap(name = "image", subcommand)]
    Image(command::image::Image),
}

/// blogpipe CLI arguments.
#[derive(Parser, Debug)]
pub struct Args {
    /// Enable the logging system, writing to the given file.
    ///
    /// Falls back to `BLOGPIPE_LOG_PATH` and then to the `log.log-file` config,
    /// logs go to stderr if none is set.
    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,

    /// Specify the path of the config file.
    #[clap(long, value_parser)]
    pub config_file: Option<PathBuf>,

    /// Override the public base URL of the assets from the config.
    #[clap(long)]
    pub base_url: Option<String>,
}

impl RunCmd {
    pub fn run(self, args: Args) -> Result<()> {
        let (config, config_err) = blog_config::load_config_on_startup(args.config_file.clone());

        let _guard = logging::init(args.log.as_deref(), &config.log)?;

        if let Some(err) = config_err {
            tracing::warn!("{err}, falling back to the default config");
        }

        let mut config = config.clone();
        if let Some(base_url) = args.base_url {
            config.assets.base_url = base_url;
        }

        tracing::debug!(
            config_file = ?blog_config::config_file(),
            ?config,
            cmd = ?self,
            "Running command"
        );

        let pipeline = ContentPipeline::from_config(&config);

        match self {
            Self::Toc(toc) => toc.run(&pipeline),
            Self::Anchors(anchors) => anchors.run(&pipeline),
            Self::Render(render) => render.run(&pipeline),
            Self::Stats(stats) => stats.run(),
            Self::Image(image) => image.run(pipeline.resolver()),
        }
    }
}
