//! Directory creation.
//!
//! `mkdir` resolves the parent through [`Namespace::split`], refuses any
//! name already used by a child of that parent, and appends the new
//! directory after the parent's existing children. Every check runs before
//! the single insertion, so a failed call leaves the tree untouched.

use alloc::string::{String, ToString};

use crate::core::{FsError, FsResult, Node, NodeId, ROOT_PATH};
use crate::namespace::Namespace;

impl Namespace {
    /// Create a directory at `path`.
    ///
    /// Returns the id of the new node. Errors:
    /// - [`FsError::NoPathProvided`] for `/`
    /// - [`FsError::MissingDirectory`] when the parent chain does not resolve
    /// - [`FsError::NoPathProvided`] when the parent resolves but the base
    ///   name is empty (`""`, `/a/`)
    /// - [`FsError::AlreadyExists`] when any child of the parent has the
    ///   base name, reported with `path` exactly as given
    pub fn mkdir(&mut self, path: &str) -> FsResult<NodeId> {
        if path == ROOT_PATH {
            return Err(FsError::NoPathProvided);
        }

        let split = self.split(path)?;
        if split.base_name.is_empty() {
            return Err(FsError::NoPathProvided);
        }

        if self.find_child(split.parent, &split.base_name).is_some() {
            log::debug!("mkdir: {} already exists", path);
            return Err(FsError::already_exists(path));
        }

        let node = Node::new_directory(split.base_name, split.parent);
        let id = self.append_child(split.parent, node);
        log::debug!("mkdir: created {} as {} under {}", path, id, split.parent);
        Ok(id)
    }

    /// Run `mkdir` and package the result with the path for reporting.
    pub fn mkdir_command(&mut self, path: &str) -> MkdirOutcome {
        MkdirOutcome {
            path: String::from(path),
            result: self.mkdir(path),
        }
    }
}

/// Outcome of one `mkdir` invocation, as a shell would report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MkdirOutcome {
    /// Path argument as given
    pub path: String,
    /// New node id, or the reason nothing was created
    pub result: FsResult<NodeId>,
}

impl MkdirOutcome {
    /// Check if the directory was created.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The user-visible status line.
    pub fn message(&self) -> String {
        status_line(&self.path, &self.result)
    }
}

impl ::core::fmt::Display for MkdirOutcome {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render a `mkdir` result as its status line.
pub fn status_line(path: &str, result: &FsResult<NodeId>) -> String {
    match result {
        Ok(_) => alloc::format!("MKDIR SUCCESS: node {} successfully created", path),
        Err(e) => e.to_string(),
    }
}
