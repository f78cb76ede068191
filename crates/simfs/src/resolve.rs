//! Path resolution.
//!
//! Turns a path string into its base name, its directory text, and the
//! directory node that would own the base name. Resolution only reads the
//! tree.

use alloc::string::String;
use alloc::vec::Vec;

use crate::core::{components, is_absolute, split_path, FsError, FsResult, NodeId, ROOT_PATH};
use crate::namespace::Namespace;

/// Result of splitting and resolving a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitPath {
    /// Final path component (empty when the path names the root)
    pub base_name: String,
    /// Text preceding the base name (`/`, empty, or `a/b`-style)
    pub dir_text: String,
    /// Directory that owns (or would own) the base name
    pub parent: NodeId,
}

impl SplitPath {
    /// True for the `/` sentinel: nothing named below the root.
    pub fn is_root(&self) -> bool {
        self.base_name.is_empty() && self.dir_text == ROOT_PATH
    }
}

/// Find a directory child of `parent` by exact name.
///
/// Entries of other types never match, even when the name is equal.
pub fn find_child_dir(ns: &Namespace, parent: NodeId, name: &str) -> Option<NodeId> {
    let node = ns.get(parent)?;
    node.children.iter().copied().find(|&c| {
        ns.get(c)
            .map_or(false, |n| n.is_directory() && n.name == name)
    })
}

impl Namespace {
    /// Split `path` into base name and directory text, and walk the
    /// directory text to its node.
    ///
    /// Absolute paths start at the root, relative ones at the cwd. On the
    /// first component with no directory of that name, fails with
    /// [`FsError::MissingDirectory`] carrying every component walked up to
    /// and including the missing one.
    pub fn split(&self, path: &str) -> FsResult<SplitPath> {
        let (dir_text, base_name) = split_path(path);
        let start = if is_absolute(path) { self.root() } else { self.cwd() };

        let parent = self.walk_dirs(start, components(dir_text))?;

        Ok(SplitPath {
            base_name: String::from(base_name),
            dir_text: String::from(dir_text),
            parent,
        })
    }

    /// Resolve a full path to the node it names.
    ///
    /// Intermediate components must be directories; the last one may be an
    /// entry of any type. `/` resolves to the root and a trailing `/`
    /// resolves to the directory before it.
    pub fn lookup(&self, path: &str) -> FsResult<NodeId> {
        let start = if is_absolute(path) { self.root() } else { self.cwd() };
        let (dir_text, base_name) = split_path(path);
        let parent = self.walk_dirs(start, components(dir_text))?;

        if base_name.is_empty() {
            return Ok(parent);
        }

        self.find_child(parent, base_name).ok_or_else(|| {
            let mut walked: Vec<&str> = components(dir_text).collect();
            walked.push(base_name);
            FsError::missing_directory(walked.join("/"))
        })
    }

    /// Descend from `start` through each named directory in turn.
    fn walk_dirs<'a>(
        &self,
        start: NodeId,
        names: impl Iterator<Item = &'a str>,
    ) -> FsResult<NodeId> {
        self.node(start)?;

        let mut current = start;
        let mut walked = String::new();
        for name in names {
            if !walked.is_empty() {
                walked.push('/');
            }
            walked.push_str(name);

            match find_child_dir(self, current, name) {
                Some(next) => current = next,
                None => {
                    log::debug!("resolve: directory {} does not exist", walked);
                    return Err(FsError::missing_directory(walked));
                }
            }
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryType;

    fn sample() -> (Namespace, NodeId, NodeId) {
        let mut ns = Namespace::new();
        let a = ns.insert_entry(ns.root(), "a", EntryType::Directory).unwrap();
        let b = ns.insert_entry(a, "b", EntryType::Directory).unwrap();
        ns.insert_entry(a, "file", EntryType::File).unwrap();
        (ns, a, b)
    }

    #[test]
    fn test_split_root_sentinel() {
        let (ns, _, _) = sample();
        let split = ns.split("/").unwrap();
        assert!(split.is_root());
        assert_eq!(split.dir_text, "/");
        assert_eq!(split.base_name, "");
        assert_eq!(split.parent, ns.root());
    }

    #[test]
    fn test_split_top_level_absolute() {
        let (ns, _, _) = sample();
        let split = ns.split("/new").unwrap();
        assert_eq!(split.dir_text, "/");
        assert_eq!(split.base_name, "new");
        assert_eq!(split.parent, ns.root());
        assert!(!split.is_root());
    }

    #[test]
    fn test_split_nested_absolute() {
        let (ns, _, b) = sample();
        let split = ns.split("/a/b/c").unwrap();
        assert_eq!(split.dir_text, "/a/b");
        assert_eq!(split.base_name, "c");
        assert_eq!(split.parent, b);
    }

    #[test]
    fn test_split_relative_uses_cwd() {
        let (mut ns, a, b) = sample();
        ns.set_cwd(a).unwrap();

        let split = ns.split("new").unwrap();
        assert_eq!(split.dir_text, "");
        assert_eq!(split.parent, a);

        let split = ns.split("b/new").unwrap();
        assert_eq!(split.dir_text, "b");
        assert_eq!(split.parent, b);
    }

    #[test]
    fn test_split_missing_reports_accumulated_path() {
        let (ns, _, _) = sample();
        assert_eq!(ns.split("/x/y"), Err(FsError::missing_directory("x")));
        assert_eq!(ns.split("/a/q/r/s"), Err(FsError::missing_directory("a/q")));
        assert_eq!(ns.split("a/b/z/w"), Err(FsError::missing_directory("a/b/z")));
    }

    #[test]
    fn test_split_ignores_non_directory_components() {
        let (ns, _, _) = sample();
        assert_eq!(
            ns.split("/a/file/x"),
            Err(FsError::missing_directory("a/file"))
        );
    }

    #[test]
    fn test_split_is_case_sensitive() {
        let (ns, _, _) = sample();
        assert_eq!(ns.split("/A/x"), Err(FsError::missing_directory("A")));
    }

    #[test]
    fn test_split_skips_empty_components() {
        let (ns, _, b) = sample();
        assert_eq!(ns.split("//a//b/c").unwrap().parent, b);
    }

    #[test]
    fn test_find_child_dir_only_matches_directories() {
        let (ns, a, b) = sample();
        assert_eq!(find_child_dir(&ns, a, "b"), Some(b));
        assert_eq!(find_child_dir(&ns, a, "file"), None);
        assert_eq!(find_child_dir(&ns, a, "missing"), None);
    }

    #[test]
    fn test_lookup() {
        let (mut ns, a, b) = sample();
        assert_eq!(ns.lookup("/").unwrap(), ns.root());
        assert_eq!(ns.lookup("/a").unwrap(), a);
        assert_eq!(ns.lookup("/a/b/").unwrap(), b);
        assert!(ns.lookup("/a/file").is_ok());
        assert_eq!(ns.lookup("/a/nope"), Err(FsError::missing_directory("a/nope")));

        ns.set_cwd(a).unwrap();
        assert_eq!(ns.lookup("b").unwrap(), b);
    }

    #[test]
    fn test_split_does_not_mutate() {
        let (ns, _, _) = sample();
        let before = ns.len();
        let _ = ns.split("/a/b/c");
        let _ = ns.split("/x/y");
        assert_eq!(ns.len(), before);
    }
}
