//! Simulated Directory Namespace
//!
//! An in-memory hierarchical namespace rooted at `/` with a current working
//! directory, and the `mkdir` operation that grows it:
//!
//! - **Types**: NodeId, Node, EntryType, DirEntry for tree entries
//! - **Path**: Pure string helpers for splitting and joining paths
//! - **Namespace**: Arena-backed tree state (root, cwd, child lists)
//! - **Resolve**: Walking a path's directory portion to its parent node
//! - **Mkdir**: Collision check and ordered insertion of new directories
//! - **Invariants**: Runtime-checkable structural properties of the tree
//! - **Snapshot**: Serializable view of the tree for inspection
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       mkdir(path)                           │
//! │                                                             │
//! │   ┌───────────────┐    ┌───────────────┐                    │
//! │   │   resolve     │    │    mkdir      │                    │
//! │   │  split(path)  │───▶│ collision chk │                    │
//! │   │  walk dirs    │    │ append child  │                    │
//! │   └───────┬───────┘    └───────┬───────┘                    │
//! │           │ read-only          │ one insertion              │
//! │           ▼                    ▼                            │
//! │   ┌─────────────────────────────────────┐                   │
//! │   │              Namespace              │                   │
//! │   │  nodes: Vec<Node>   root   cwd      │                   │
//! │   └─────────────────────────────────────┘                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures never touch the tree: resolution is a pure walk, and the only
//! mutation happens after every check has passed.

#![no_std]
extern crate alloc;

pub mod core;
pub mod invariants;
pub mod mkdir;
pub mod namespace;
pub mod resolve;
pub mod snapshot;

// Convenient re-exports at crate root
pub use crate::core::{components, is_absolute, join_path, split_path};
pub use crate::core::{DirEntry, EntryType, FsError, FsResult, Node, NodeId};
pub use invariants::{check_all_invariants, InvariantViolation};
pub use mkdir::{status_line, MkdirOutcome};
pub use namespace::Namespace;
pub use resolve::SplitPath;
pub use snapshot::{Snapshot, SnapshotNode};
