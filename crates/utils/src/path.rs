//! Helpers for the slash-separated logical paths of the storage layer.
//!
//! These are not filesystem paths, they are always `/`-separated regardless of
//! the host platform.

/// Converts backslashes to forward slashes and strips a single leading slash.
///
/// # Example
///
/// ```
/// use utils::normalize_path;
///
/// assert_eq!(normalize_path(r"\storage\foo.png"), "storage/foo.png");
/// assert_eq!(normalize_path("//foo.png"), "/foo.png");
/// ```
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    match path.strip_prefix('/') {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

/// Returns `path` without `prefix` if it starts with it, `path` otherwise.
pub fn strip_prefix_once<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Joins `base` and `rest` with exactly one slash between them.
pub fn join_path(base: &str, rest: &str) -> String {
    let base = base.trim_end_matches('/');
    let rest = rest.trim_start_matches('/');
    if base.is_empty() {
        rest.to_string()
    } else if rest.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/assets/a.png"), "assets/a.png");
        assert_eq!(normalize_path("assets/a.png"), "assets/a.png");
        assert_eq!(normalize_path(r"assets\images\a.png"), "assets/images/a.png");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_strip_prefix_once() {
        assert_eq!(strip_prefix_once("storage/storage/a", "storage/"), "storage/a");
        assert_eq!(strip_prefix_once("assets/a", "storage/"), "assets/a");
        assert_eq!(strip_prefix_once("assets/a", ""), "assets/a");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("assets/images/", "/a.png"), "assets/images/a.png");
        assert_eq!(join_path("", "a.png"), "a.png");
        assert_eq!(join_path("assets", ""), "assets");
    }
}
