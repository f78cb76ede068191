//! Namespace state - the arena tree plus the current working directory.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! Ownership runs strictly downward through each node's child list; the
//! parent field is a plain index used for upward walks only. Nodes are never
//! removed, so an id stays valid for the lifetime of the namespace.

use alloc::string::String;
use alloc::vec::Vec;

use crate::core::{
    is_valid_name, join_path, DirEntry, EntryType, FsError, FsResult, Node, NodeId, ROOT_PATH,
};

/// The simulated filesystem namespace.
///
/// Created once at program start and passed by reference to every
/// operation. Holds the root (always [`NodeId::ROOT`]) and the current
/// working directory used to resolve relative paths.
#[derive(Clone, Debug)]
pub struct Namespace {
    /// Node arena, indexed by `NodeId`
    nodes: Vec<Node>,
    /// Current working directory
    cwd: NodeId,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only the root directory, with cwd at root.
    pub fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Node::root());
        Self {
            nodes,
            cwd: NodeId::ROOT,
        }
    }

    /// The root directory.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The current working directory.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Change the current working directory.
    ///
    /// Only live directory nodes are accepted.
    pub fn set_cwd(&mut self, id: NodeId) -> FsResult<()> {
        let node = self.node(id)?;
        if !node.is_directory() {
            return Err(FsError::not_a_directory(self.absolute_path(id)?));
        }
        log::debug!("namespace: cwd {} -> {}", self.cwd, id);
        self.cwd = id;
        Ok(())
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A namespace always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Look up a node by id, failing on ids this namespace never issued.
    pub fn node(&self, id: NodeId) -> FsResult<&Node> {
        self.get(id).ok_or(FsError::InvalidNode(id))
    }

    /// Iterate over every node with its id, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Child ids of a node, in insertion order.
    pub fn children(&self, id: NodeId) -> FsResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Listing of a directory's children, in insertion order.
    pub fn entries(&self, id: NodeId) -> FsResult<Vec<DirEntry>> {
        let node = self.node(id)?;
        if !node.is_directory() {
            return Err(FsError::not_a_directory(self.absolute_path(id)?));
        }

        let mut entries = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            entries.push(DirEntry::from_node(child, self.node(child)?));
        }
        Ok(entries)
    }

    /// Find a child of `parent` with exactly this name, of any type.
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        let node = self.get(parent)?;
        node.children
            .iter()
            .copied()
            .find(|&c| self.get(c).map_or(false, |n| n.name == name))
    }

    /// Absolute path of a node, built by walking parent links up to root.
    pub fn absolute_path(&self, id: NodeId) -> FsResult<String> {
        let mut names = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            names.push(current.name.as_str());
            current = self.node(parent)?;
        }

        if names.is_empty() {
            return Ok(String::from(ROOT_PATH));
        }

        let mut path = String::new();
        for name in names.iter().rev() {
            path.push('/');
            path.push_str(name);
        }
        Ok(path)
    }

    /// Insert an entry of any type as the last child of `parent`.
    ///
    /// This is the raw insertion used by collaborators that create entries
    /// other than through `mkdir`. The parent must be a directory and no
    /// child of it may already carry `name`.
    pub fn insert_entry(
        &mut self,
        parent: NodeId,
        name: &str,
        entry_type: EntryType,
    ) -> FsResult<NodeId> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidName(String::from(name)));
        }
        if !self.node(parent)?.is_directory() {
            return Err(FsError::not_a_directory(self.absolute_path(parent)?));
        }
        if self.find_child(parent, name).is_some() {
            let path = join_path(&self.absolute_path(parent)?, name);
            return Err(FsError::already_exists(path));
        }

        Ok(self.append_child(parent, Node::new_entry(String::from(name), entry_type, parent)))
    }

    /// Allocate `node` in the arena and link it after the parent's last child.
    ///
    /// Callers have already checked that `parent` is live and that the name
    /// is free.
    pub(crate) fn append_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Build a namespace from raw parts, bypassing every check.
    #[cfg(test)]
    pub(crate) fn from_parts(nodes: Vec<Node>, cwd: NodeId) -> Self {
        Self { nodes, cwd }
    }
}
