//! Path utilities for the namespace.
//!
//! Pure string handling only; nothing here looks at the tree.

use alloc::string::String;

/// Path separator and the textual name of the root.
pub const ROOT_PATH: &str = "/";

/// Check if a path is absolute (starts at the root).
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Split a path into its directory text and base name at the last `/`.
///
/// - `"/"` gives `("/", "")`
/// - `"name"` gives `("", "name")`
/// - `"/name"` gives `("/", "name")`
/// - `"a/b/c"` gives `("a/b", "c")`
pub fn split_path(path: &str) -> (&str, &str) {
    if path == ROOT_PATH {
        return (ROOT_PATH, "");
    }

    match path.rfind('/') {
        Some(0) => (ROOT_PATH, &path[1..]),
        Some(pos) => (&path[..pos], &path[pos + 1..]),
        None => ("", path),
    }
}

/// Iterate over the non-empty components of a directory text.
///
/// Repeated and leading/trailing separators produce no components.
pub fn components(dir: &str) -> impl Iterator<Item = &str> {
    dir.split('/').filter(|c| !c.is_empty())
}

/// Join a directory path and an entry name.
pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        String::from(name)
    } else if base.ends_with('/') {
        alloc::format!("{}{}", base, name)
    } else {
        alloc::format!("{}/{}", base, name)
    }
}

/// Check if a name can be stored as a single entry.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/"));
        assert!(is_absolute("/a/b"));
        assert!(!is_absolute("a/b"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_path("/"), ("/", ""));
    }

    #[test]
    fn test_split_relative_name() {
        assert_eq!(split_path("newdir"), ("", "newdir"));
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_path("/a"), ("/", "a"));
    }

    #[test]
    fn test_split_nested() {
        assert_eq!(split_path("/a/b/c"), ("/a/b", "c"));
        assert_eq!(split_path("a/b/c"), ("a/b", "c"));
    }

    #[test]
    fn test_split_trailing_slash() {
        assert_eq!(split_path("/a/"), ("/a", ""));
        assert_eq!(split_path("a/"), ("a", ""));
    }

    #[test]
    fn test_components() {
        let parts: Vec<&str> = components("/a//b/c/").collect();
        assert_eq!(parts, ["a", "b", "c"]);
        assert_eq!(components("/").count(), 0);
        assert_eq!(components("").count(), 0);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "home"), "/home");
        assert_eq!(join_path("/home", "user"), "/home/user");
        assert_eq!(join_path("", "x"), "x");
        assert_eq!(join_path("x", "y"), "x/y");
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("docs"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a/b"));
    }
}
