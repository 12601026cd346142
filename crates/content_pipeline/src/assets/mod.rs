//! Resolution of stored asset references to public URLs.
//!
//! Stored image references come in several shapes:
//!
//! - absolute URLs: `https://cdn.example.com/x.png`
//! - storage-relative paths: `storage/assets/images/uploads/x.png`
//! - paths inside the public asset namespace: `assets/images/uploads/x.png`
//! - bare filenames: `x.png`
//!
//! This module only normalizes paths. Mapping a logical path to a servable URL
//! is delegated to a [`UrlFor`] implementation.

pub mod image_paths;

pub use self::image_paths::rewrite_content_images;

use blog_config::AssetsConfig;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use utils::{join_path, normalize_path, strip_prefix_once};

/// Characters escaped in the path part of a public URL.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Maps a logical storage path to a URL servable to clients.
pub trait UrlFor: Send + Sync {
    fn url_for(&self, path: &str) -> String;
}

impl<F> UrlFor for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn url_for(&self, path: &str) -> String {
        self(path)
    }
}

/// Public URLs of assets served from a static base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrl {
    base_url: String,
}

impl PublicUrl {
    /// `base_url` may be empty, URLs are then root-relative.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }
}

impl UrlFor for PublicUrl {
    fn url_for(&self, path: &str) -> String {
        let encoded = utf8_percent_encode(path.trim_start_matches('/'), PATH);
        format!("{}/{encoded}", self.base_url)
    }
}

/// Logical category of an asset reference, selecting its base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Post featured image, stored once per size variant.
    Featured,
    /// Image of a post gallery.
    Gallery,
    /// Image embedded in a post body.
    Content,
}

/// Markers and base directories used to normalize stored paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub storage_prefix: String,
    pub asset_prefix: String,
    pub featured_dir: String,
    pub gallery_dir: String,
    pub content_dir: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::from(&AssetsConfig::default())
    }
}

impl From<&AssetsConfig> for AssetPaths {
    fn from(config: &AssetsConfig) -> Self {
        Self {
            storage_prefix: config.storage_prefix.clone(),
            asset_prefix: config.asset_prefix.clone(),
            featured_dir: config.featured_dir.clone(),
            gallery_dir: config.gallery_dir.clone(),
            content_dir: config.content_dir.clone(),
        }
    }
}

impl AssetPaths {
    pub fn base_dir(&self, category: AssetCategory) -> &str {
        match category {
            AssetCategory::Featured => &self.featured_dir,
            AssetCategory::Gallery => &self.gallery_dir,
            AssetCategory::Content => &self.content_dir,
        }
    }
}

/// Resolves stored asset references of every category to public URLs.
///
/// Resolution never fails: an unexpected path shape resolves to some URL, at
/// worst one of a file that does not exist.
#[derive(Debug, Clone)]
pub struct AssetResolver<U = PublicUrl> {
    paths: AssetPaths,
    url: U,
}

impl AssetResolver<PublicUrl> {
    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(config.into(), PublicUrl::new(config.base_url.as_str()))
    }
}

impl<U: UrlFor> AssetResolver<U> {
    pub fn new(paths: AssetPaths, url: U) -> Self {
        Self { paths, url }
    }

    /// Returns the URL of the `size_variant` of a featured image.
    ///
    /// Returns `None` when the post has no featured image.
    ///
    /// # Example
    ///
    /// ```
    /// use content_pipeline::{AssetPaths, AssetResolver, PublicUrl};
    ///
    /// let resolver = AssetResolver::new(AssetPaths::default(), PublicUrl::new("https://blog.example.com"));
    /// assert_eq!(resolver.resolve_featured_image_url("thumbnail", None), None);
    /// assert_eq!(
    ///     resolver.resolve_featured_image_url("thumbnail", Some("photo.jpg")).as_deref(),
    ///     Some("https://blog.example.com/assets/images/featured/thumbnail_photo.jpg")
    /// );
    /// ```
    pub fn resolve_featured_image_url(
        &self,
        size_variant: &str,
        stored_filename: Option<&str>,
    ) -> Option<String> {
        let filename = stored_filename.filter(|f| !f.trim().is_empty())?;
        let path = join_path(
            self.paths.base_dir(AssetCategory::Featured),
            &format!("{size_variant}_{filename}"),
        );
        Some(self.url.url_for(&path))
    }

    /// Returns the URL of a gallery image.
    pub fn resolve_gallery_image_url(&self, filename: &str) -> String {
        let path = join_path(self.paths.base_dir(AssetCategory::Gallery), filename);
        self.url.url_for(&path)
    }

    /// Returns the URL of an image embedded in a post body.
    ///
    /// The first matching rule wins:
    ///
    /// 1. `http://` and `https://` URLs are returned unchanged.
    /// 2. Backslashes become slashes, a single leading slash is stripped.
    /// 3. The storage prefix is stripped.
    /// 4. Paths inside the asset namespace are resolved as they are.
    /// 5. Anything else is relative to the content image directory.
    pub fn resolve_content_image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let normalized = normalize_path(path);
        let path = strip_prefix_once(&normalized, &self.paths.storage_prefix);

        let asset_prefix = self.paths.asset_prefix.as_str();
        if !asset_prefix.is_empty() && path.starts_with(asset_prefix) {
            self.url.url_for(path)
        } else {
            let path = join_path(self.paths.base_dir(AssetCategory::Content), path);
            self.url.url_for(&path)
        }
    }

    /// Resolves `path` according to its category.
    ///
    /// A featured reference is expected to carry its size prefix already, as in
    /// `thumbnail_photo.jpg`.
    pub fn resolve(&self, category: AssetCategory, path: &str) -> String {
        match category {
            AssetCategory::Featured => self
                .url
                .url_for(&join_path(self.paths.base_dir(category), path)),
            AssetCategory::Gallery => self.resolve_gallery_image_url(path),
            AssetCategory::Content => self.resolve_content_image_url(path),
        }
    }
}
