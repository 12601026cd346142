use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use content_pipeline::AssetResolver;

/// Resolve stored image references to public URLs.
#[derive(Subcommand, Debug, Clone)]
pub enum Image {
    Featured(Featured),
    Gallery(Gallery),
    Content(Content),
}

impl Image {
    pub fn run(&self, resolver: &AssetResolver) -> Result<()> {
        let url = match self {
            Self::Featured(featured) => featured.resolve(resolver)?,
            Self::Gallery(gallery) => resolver.resolve_gallery_image_url(&gallery.filename),
            Self::Content(content) => resolver.resolve_content_image_url(&content.path),
        };
        println!("{url}");
        Ok(())
    }
}

/// URL of a size variant of a featured image.
#[derive(Parser, Debug, Clone)]
pub struct Featured {
    /// Size variant, e.g. `thumbnail`.
    #[clap(long, default_value = "thumbnail")]
    size: String,

    /// Stored filename of the featured image.
    #[clap(index = 1)]
    filename: Option<String>,
}

impl Featured {
    fn resolve(&self, resolver: &AssetResolver) -> Result<String> {
        resolver
            .resolve_featured_image_url(&self.size, self.filename.as_deref())
            .ok_or_else(|| anyhow!("no featured image filename given"))
    }
}

/// URL of a gallery image.
#[derive(Parser, Debug, Clone)]
pub struct Gallery {
    /// Stored filename of the gallery image.
    #[clap(index = 1)]
    filename: String,
}

/// URL of an image embedded in a post body.
#[derive(Parser, Debug, Clone)]
pub struct Content {
    /// Stored path or URL of the image.
    #[clap(index = 1)]
    path: String,
}
