//! Structural invariants of the namespace tree.
//!
//! Runtime-checkable properties that every reachable state must satisfy.
//! Used as assertions in tests after each mutation.
//!
//! # Invariants
//!
//! 1. **Single Root**: Exactly one node has no parent, it is `NodeId::ROOT`,
//!    and it is a directory
//! 2. **Link Consistency**: Every child lists its owner as parent, and every
//!    non-root node appears in its parent's child list exactly once
//! 3. **Directory Parents**: Only directories own children
//! 4. **Unique Directory Names**: No two directory children of one parent
//!    share a name
//! 5. **Reachability**: Every node is reached from the root exactly once
//! 6. **Live Cwd**: The current directory is a live directory node

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::core::NodeId;
use crate::namespace::Namespace;

/// An invariant violation with details
#[derive(Clone, Debug)]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

impl InvariantViolation {
    fn new(invariant: &'static str, description: String) -> Self {
        Self {
            invariant,
            description,
        }
    }
}

/// Check all namespace invariants.
///
/// Returns a list of violations (empty if all invariants hold).
pub fn check_all_invariants(ns: &Namespace) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(check_single_root(ns));
    violations.extend(check_link_consistency(ns));
    violations.extend(check_directory_parents(ns));
    violations.extend(check_unique_directory_names(ns));
    violations.extend(check_reachability(ns));
    violations.extend(check_live_cwd(ns));

    violations
}

/// Invariant 1: exactly one parentless node, the root directory
fn check_single_root(ns: &Namespace) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    match ns.get(NodeId::ROOT) {
        Some(root) => {
            if !root.is_directory() {
                violations.push(InvariantViolation::new(
                    "single_root",
                    String::from("Root node is not a directory"),
                ));
            }
            if root.parent.is_some() {
                violations.push(InvariantViolation::new(
                    "single_root",
                    String::from("Root node has a parent"),
                ));
            }
        }
        None => violations.push(InvariantViolation::new(
            "single_root",
            String::from("Namespace has no root node"),
        )),
    }

    for (id, node) in ns.iter() {
        if id != NodeId::ROOT && node.parent.is_none() {
            violations.push(InvariantViolation::new(
                "single_root",
                alloc::format!("Node {} ('{}') has no parent", id, node.name),
            ));
        }
    }

    violations
}

/// Invariant 2: parent and child links agree in both directions
fn check_link_consistency(ns: &Namespace) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (id, node) in ns.iter() {
        for &child in &node.children {
            match ns.get(child) {
                Some(c) if c.parent == Some(id) => {}
                Some(c) => violations.push(InvariantViolation::new(
                    "link_consistency",
                    alloc::format!(
                        "Node {} lists child {} whose parent is {:?}",
                        id,
                        child,
                        c.parent
                    ),
                )),
                None => violations.push(InvariantViolation::new(
                    "link_consistency",
                    alloc::format!("Node {} lists non-existent child {}", id, child),
                )),
            }
        }

        if let Some(parent) = node.parent {
            let listed = ns
                .get(parent)
                .map_or(0, |p| p.children.iter().filter(|&&c| c == id).count());
            if listed != 1 {
                violations.push(InvariantViolation::new(
                    "link_consistency",
                    alloc::format!(
                        "Node {} appears {} times in parent {}'s children",
                        id,
                        listed,
                        parent
                    ),
                ));
            }
        }
    }

    violations
}

/// Invariant 3: files are leaves
fn check_directory_parents(ns: &Namespace) -> Vec<InvariantViolation> {
    ns.iter()
        .filter(|(_, node)| !node.is_directory() && !node.children.is_empty())
        .map(|(id, node)| {
            InvariantViolation::new(
                "directory_parents",
                alloc::format!("Non-directory {} ('{}') has children", id, node.name),
            )
        })
        .collect()
}

/// Invariant 4: directory names are unique among siblings
fn check_unique_directory_names(ns: &Namespace) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (id, node) in ns.iter() {
        let dirs: Vec<&str> = node
            .children
            .iter()
            .filter_map(|&c| ns.get(c))
            .filter(|c| c.is_directory())
            .map(|c| c.name.as_str())
            .collect();

        for (i, name) in dirs.iter().enumerate() {
            if dirs[..i].contains(name) {
                violations.push(InvariantViolation::new(
                    "unique_directory_names",
                    alloc::format!("Node {} has more than one directory named '{}'", id, name),
                ));
            }
        }
    }

    violations
}

/// Invariant 5: the tree spans every node exactly once
fn check_reachability(ns: &Namespace) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut seen = vec![0usize; ns.len()];
    let mut stack = vec![NodeId::ROOT];

    while let Some(id) = stack.pop() {
        let Some(count) = seen.get_mut(id.index()) else {
            continue;
        };
        *count += 1;
        // A second visit means shared ownership or a cycle; stop descending.
        if *count > 1 {
            continue;
        }
        if let Some(node) = ns.get(id) {
            stack.extend(node.children.iter().copied());
        }
    }

    for (index, count) in seen.into_iter().enumerate() {
        if count != 1 {
            violations.push(InvariantViolation::new(
                "reachability",
                alloc::format!("Node {} reached {} times from root", NodeId(index), count),
            ));
        }
    }

    violations
}

/// Invariant 6: cwd names a live directory
fn check_live_cwd(ns: &Namespace) -> Vec<InvariantViolation> {
    match ns.get(ns.cwd()) {
        Some(node) if node.is_directory() => Vec::new(),
        Some(_) => vec![InvariantViolation::new(
            "live_cwd",
            alloc::format!("Cwd {} is not a directory", ns.cwd()),
        )],
        None => vec![InvariantViolation::new(
            "live_cwd",
            alloc::format!("Cwd {} does not exist", ns.cwd()),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryType, Node};

    #[test]
    fn test_fresh_namespace_holds() {
        let ns = Namespace::new();
        assert!(check_all_invariants(&ns).is_empty());
    }

    #[test]
    fn test_invariants_hold_after_mkdir_sequence() {
        let mut ns = Namespace::new();
        ns.mkdir("/a").unwrap();
        ns.mkdir("/a/b").unwrap();
        ns.mkdir("/a/c").unwrap();
        ns.insert_entry(ns.root(), "readme", EntryType::File).unwrap();
        let _ = ns.mkdir("/a/b");
        let _ = ns.mkdir("/missing/x");
        ns.set_cwd(ns.lookup("/a/c").unwrap()).unwrap();
        ns.mkdir("deeper").unwrap();

        let violations = check_all_invariants(&ns);
        assert!(violations.is_empty(), "violations: {:?}", violations);
    }

    fn names(violations: &[InvariantViolation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.invariant).collect()
    }

    #[test]
    fn test_detects_duplicate_directory_names() {
        let mut root = Node::root();
        root.children = vec![NodeId(1), NodeId(2)];
        let nodes = vec![
            root,
            Node::new_directory(String::from("a"), NodeId::ROOT),
            Node::new_directory(String::from("a"), NodeId::ROOT),
        ];
        let ns = Namespace::from_parts(nodes, NodeId::ROOT);
        assert_eq!(names(&check_all_invariants(&ns)), ["unique_directory_names"]);
    }

    #[test]
    fn test_file_and_directory_may_share_a_name() {
        let mut root = Node::root();
        root.children = vec![NodeId(1), NodeId(2)];
        let nodes = vec![
            root,
            Node::new_directory(String::from("a"), NodeId::ROOT),
            Node::new_entry(String::from("a"), EntryType::File, NodeId::ROOT),
        ];
        let ns = Namespace::from_parts(nodes, NodeId::ROOT);
        assert!(check_all_invariants(&ns).is_empty());
    }

    #[test]
    fn test_detects_unlinked_node() {
        let nodes = vec![
            Node::root(),
            Node::new_directory(String::from("orphan"), NodeId::ROOT),
        ];
        let ns = Namespace::from_parts(nodes, NodeId::ROOT);
        let found = names(&check_all_invariants(&ns));
        assert!(found.contains(&"link_consistency"));
        assert!(found.contains(&"reachability"));
    }

    #[test]
    fn test_detects_file_cwd_and_file_parent() {
        let mut root = Node::root();
        root.children = vec![NodeId(1)];
        let mut file = Node::new_entry(String::from("f"), EntryType::File, NodeId::ROOT);
        file.children = vec![NodeId(2)];
        let nodes = vec![
            root,
            file,
            Node::new_directory(String::from("d"), NodeId(1)),
        ];
        let ns = Namespace::from_parts(nodes, NodeId(1));
        let found = names(&check_all_invariants(&ns));
        assert!(found.contains(&"directory_parents"));
        assert!(found.contains(&"live_cwd"));
    }

    #[test]
    fn test_violation_fields() {
        let v = InvariantViolation::new("single_root", String::from("x"));
        assert_eq!(v.invariant, "single_root");
        assert_eq!(v.description, "x");
    }
}
