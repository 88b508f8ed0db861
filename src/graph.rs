//! The capability shared by every node kind that takes part in a hierarchy.

use std::collections::HashSet;

/// A node in a parent/child hierarchy.
///
/// Roles, admin roles, and org units all implement this so one
/// [`Hierarchy`](crate::hierarchy::Hierarchy) can walk any of them. The name
/// is the node's only identity and must be unique within its kind.
///
/// Single-edge mutations are idempotent: adding a parent that is already
/// present or removing one that is absent changes nothing.
pub trait Graphable {
    /// The node's name.
    fn name(&self) -> &str;

    /// Names of the direct parents. Empty when the node has none.
    fn parents(&self) -> &HashSet<String>;

    /// Mutable access to the direct parents.
    fn parents_mut(&mut self) -> &mut HashSet<String>;

    /// Replace the full parent set.
    fn set_parents(&mut self, parents: HashSet<String>) {
        *self.parents_mut() = parents;
    }

    /// Add one parent.
    fn set_parent(&mut self, parent: &str) {
        if !self.has_parent(parent) {
            self.parents_mut().insert(parent.to_string());
        }
    }

    /// Remove one parent, matching its name ignoring case.
    fn del_parent(&mut self, parent: &str) {
        let lowered = parent.to_lowercase();
        self.parents_mut().retain(|p| p.to_lowercase() != lowered);
    }

    /// Check whether `parent` is a direct parent, ignoring case.
    fn has_parent(&self, parent: &str) -> bool {
        let lowered = parent.to_lowercase();
        self.parents().iter().any(|p| p.to_lowercase() == lowered)
    }

    /// Names of the direct children. Kept in step with the children's
    /// parent sets by [`Hierarchy`](crate::hierarchy::Hierarchy).
    fn children(&self) -> &HashSet<String>;

    /// Mutable access to the direct children.
    fn children_mut(&mut self) -> &mut HashSet<String>;

    /// Replace the full child set.
    fn set_children(&mut self, children: HashSet<String>) {
        *self.children_mut() = children;
    }

    /// Add one child.
    fn set_child(&mut self, child: &str) {
        if !self.has_child(child) {
            self.children_mut().insert(child.to_string());
        }
    }

    /// Remove one child, matching its name ignoring case.
    fn del_child(&mut self, child: &str) {
        let lowered = child.to_lowercase();
        self.children_mut().retain(|c| c.to_lowercase() != lowered);
    }

    /// Check whether `child` is a direct child, ignoring case.
    fn has_child(&self, child: &str) -> bool {
        let lowered = child.to_lowercase();
        self.children().iter().any(|c| c.to_lowercase() == lowered)
    }
}

/// Implement [`Graphable`] for a struct with `name: String`,
/// `parents: HashSet<String>` and `children: HashSet<String>` fields.
macro_rules! impl_graphable {
    ($ty:ty) => {
        impl $crate::graph::Graphable for $ty {
            fn name(&self) -> &str {
                &self.name
            }

            fn parents(&self) -> &::std::collections::HashSet<String> {
                &self.parents
            }

            fn parents_mut(&mut self) -> &mut ::std::collections::HashSet<String> {
                &mut self.parents
            }

            fn children(&self) -> &::std::collections::HashSet<String> {
                &self.children
            }

            fn children_mut(&mut self) -> &mut ::std::collections::HashSet<String> {
                &mut self.children
            }
        }
    };
}

pub(crate) use impl_graphable;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Node {
        name: String,
        parents: HashSet<String>,
        children: HashSet<String>,
    }

    impl_graphable!(Node);

    #[test]
    fn test_set_and_del_parent_are_idempotent() {
        let mut node = Node {
            name: "n".into(),
            ..Default::default()
        };

        node.set_parent("A");
        node.set_parent("A");
        node.set_parent("a");
        assert_eq!(node.parents().len(), 1);

        node.del_parent("ROLE_A");
        assert_eq!(node.parents().len(), 1);

        node.del_parent("a");
        assert!(node.parents().is_empty());
    }

    #[test]
    fn test_set_parents_replaces() {
        let mut node = Node::default();
        node.set_parent("old");
        node.set_parents(["x".to_string(), "y".to_string()].into_iter().collect());
        assert!(node.has_parent("X"));
        assert!(!node.has_parent("old"));
    }

    #[test]
    fn test_child_mutation_ignores_case() {
        let mut node = Node::default();
        node.set_child("Teller");
        node.set_child("TELLER");
        assert_eq!(node.children().len(), 1);
        assert!(node.has_child("teller"));

        node.del_child("teller");
        assert!(node.children().is_empty());
    }
}
