//! Snapshot serialization for namespace inspection

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::core::{EntryType, FsResult, NodeId};
use crate::namespace::Namespace;

/// One node of a snapshot.
///
/// Nodes are listed in creation order, so a parent always precedes its
/// children and siblings appear in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// Entry name (empty for the root)
    pub name: String,
    /// Entry type
    pub entry_type: EntryType,
    /// Position of the parent in [`Snapshot::nodes`] (None for the root)
    pub parent: Option<usize>,
}

/// Snapshot of namespace state for inspection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Absolute path of the current directory
    pub cwd: String,
    /// Total node count, root included
    pub node_count: usize,
    /// Every node, root first
    pub nodes: Vec<SnapshotNode>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 2;

    /// Capture the current state of `ns`.
    pub fn of(ns: &Namespace) -> FsResult<Self> {
        let nodes = ns
            .iter()
            .map(|(_, node)| SnapshotNode {
                name: node.name.clone(),
                entry_type: node.entry_type,
                parent: node.parent.map(NodeId::index),
            })
            .collect();

        Ok(Self {
            version: Self::CURRENT_VERSION,
            cwd: ns.absolute_path(ns.cwd())?,
            node_count: ns.len(),
            nodes,
        })
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Children of the node at `index`, in insertion order.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = (usize, &SnapshotNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(index))
    }

    /// Find a snapshot node by absolute path.
    pub fn find(&self, path: &str) -> Option<&SnapshotNode> {
        let mut current = 0;
        for name in crate::core::components(path) {
            current = self
                .children_of(current)
                .find(|(_, node)| node.name == name)
                .map(|(i, _)| i)?;
        }
        self.nodes.get(current)
    }
}
