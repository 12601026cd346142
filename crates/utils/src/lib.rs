//! Small text and path helpers shared by the content pipeline and the CLI.

pub mod io;
pub mod path;
pub mod text;

pub use self::io::{read_input, write_output};
pub use self::path::{join_path, normalize_path, strip_prefix_once};
pub use self::text::{
    collapse_whitespace, decode_entities, escape_html, slugify, strip_tags, strip_tags_with,
};
