//! Core types for the namespace.
//!
//! Defines node identifiers, tree nodes, and directory entry views.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Stable index of a node in the namespace arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root directory always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index for this id.
    pub fn index(self) -> usize {
        self.0
    }
}

impl ::core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type of namespace entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Directory - the only type that participates in path traversal
    Directory,

    /// Regular file (created by collaborators outside `mkdir`)
    File,
}

/// A node in the namespace tree.
///
/// Children are held as an ordered list of ids in insertion order; the
/// sibling relation of a node is its neighbour in its parent's list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Entry name (empty for the root)
    pub name: String,

    /// Type of entry
    pub entry_type: EntryType,

    /// Owning directory (None only for the root)
    pub parent: Option<NodeId>,

    /// Children in insertion order
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create the root directory node.
    pub fn root() -> Self {
        Self {
            name: String::new(),
            entry_type: EntryType::Directory,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a new childless directory node under `parent`.
    pub fn new_directory(name: String, parent: NodeId) -> Self {
        Self::new_entry(name, EntryType::Directory, parent)
    }

    /// Create a new childless node of any type under `parent`.
    pub fn new_entry(name: String, entry_type: EntryType, parent: NodeId) -> Self {
        Self {
            name,
            entry_type,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Check if this is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self.entry_type, EntryType::Directory)
    }

    /// Check if this is the root (the only node without a parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Directory listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Node id of the entry
    pub id: NodeId,

    /// Entry name
    pub name: String,

    /// Entry type
    pub entry_type: EntryType,

    /// Number of children (0 for files)
    pub child_count: usize,
}

impl DirEntry {
    /// Build a listing entry for `node` stored at `id`.
    pub fn from_node(id: NodeId, node: &Node) -> Self {
        Self {
            id,
            name: node.name.clone(),
            entry_type: node.entry_type,
            child_count: node.children.len(),
        }
    }
}
