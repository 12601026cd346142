//! Post-processing of stored blog post bodies.
//!
//! The pipeline is made of independent stages, each a pure function of its
//! input and an immutable configuration:
//!
//! - [`heading`] - Extract headings of a tag level as plain text, for a table of contents
//! - [`anchor`] - Give every second-level heading a slug id and an inline anchor link
//! - [`assets`] - Resolve stored featured, gallery and inline image paths to public URLs
//! - [`toc`] - Table of contents built from the extracted headings
//! - [`stats`] - Word count and reading time of a body
//! - [`pipeline`] - Runs the stages over a body in one call
//!
//! # Example
//!
//! ```
//! use content_pipeline::{inject_anchors, extract_headings};
//!
//! let body = "<p>Hi</p><h2>Getting Started</h2>";
//! assert_eq!(extract_headings(body, "h2"), vec!["Getting Started"]);
//! assert!(inject_anchors(body).contains(r#"id="getting-started""#));
//! ```

pub mod anchor;
pub mod assets;
pub mod heading;
pub mod pipeline;
pub mod stats;
pub mod toc;

// Re-export commonly used types at crate root
pub use anchor::{inject_anchors, inject_anchors_with, AnchorOptions};
pub use assets::{
    rewrite_content_images, AssetCategory, AssetPaths, AssetResolver, PublicUrl, UrlFor,
};
pub use heading::{extract_h2_headings, extract_heading_entries, extract_headings, DEFAULT_HEADING_TAG};
pub use pipeline::{ContentPipeline, ProcessedContent};
pub use stats::{calculate_content_stats, ContentStats};
pub use toc::{heading_slug, Heading, TableOfContents};
