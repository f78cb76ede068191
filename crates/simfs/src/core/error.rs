//! Error types for the namespace.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use super::types::NodeId;

/// Result alias used throughout the crate.
pub type FsResult<T> = Result<T, FsError>;

/// Errors from namespace operations.
///
/// Every variant is a semantic failure of a single call: the tree is left
/// exactly as it was and nothing is worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// The path names the root itself, so there is nothing to create
    NoPathProvided,

    /// A component of the directory portion does not exist as a directory.
    /// Carries the components walked so far, up to and including the
    /// missing one.
    MissingDirectory(String),

    /// An entry with the same name already exists in the parent.
    /// Carries the full path as given by the caller.
    AlreadyExists(String),

    /// The node exists but is not a directory
    NotADirectory(String),

    /// The id does not name a node in this namespace
    InvalidNode(NodeId),

    /// The entry name cannot be stored (empty or contains `/`)
    InvalidName(String),
}

impl FsError {
    /// Create a missing directory error from the accumulated walk.
    pub fn missing_directory(walked: impl Into<String>) -> Self {
        Self::MissingDirectory(walked.into())
    }

    /// Create an already-exists error for the caller's path.
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists(path.into())
    }

    /// Create a not-a-directory error.
    pub fn not_a_directory(what: impl Into<String>) -> Self {
        Self::NotADirectory(what.into())
    }

    /// Check if this is a name collision.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, FsError::AlreadyExists(_))
    }
}

impl ::core::fmt::Display for FsError {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            FsError::NoPathProvided => write!(f, "MKDIR ERROR: no path provided"),
            FsError::MissingDirectory(walked) => {
                write!(f, "ERROR: directory {} does not exist", walked)
            }
            FsError::AlreadyExists(path) => {
                write!(f, "MKDIR ERROR: directory {} already exists", path)
            }
            FsError::NotADirectory(what) => write!(f, "ERROR: {} is not a directory", what),
            FsError::InvalidNode(id) => write!(f, "ERROR: no such node {}", id),
            FsError::InvalidName(name) => write!(f, "ERROR: invalid entry name '{}'", name),
        }
    }
}

impl ::core::error::Error for FsError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FsError::NoPathProvided.to_string(),
            "MKDIR ERROR: no path provided"
        );
        assert_eq!(
            FsError::missing_directory("x").to_string(),
            "ERROR: directory x does not exist"
        );
        assert_eq!(
            FsError::already_exists("/a/b").to_string(),
            "MKDIR ERROR: directory /a/b already exists"
        );
    }

    #[test]
    fn test_is_already_exists() {
        assert!(FsError::already_exists("/a").is_already_exists());
        assert!(!FsError::not_a_directory("/f").is_already_exists());
    }

    #[test]
    fn test_secondary_messages() {
        assert_eq!(
            FsError::not_a_directory("/f").to_string(),
            "ERROR: /f is not a directory"
        );
        assert_eq!(
            FsError::InvalidNode(NodeId(3)).to_string(),
            "ERROR: no such node #3"
        );
        assert_eq!(
            FsError::InvalidName(String::from("a/b")).to_string(),
            "ERROR: invalid entry name 'a/b'"
        );
    }
}
