//! Name-level parent/child edges used for hierarchy edits.
//!
//! A [`Relationship`] carries only the two node names. Edit routines put
//! relationships into sets and maps to decide whether an edge already
//! exists, so equality and hashing both ignore letter case.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A parent/child edge between two nodes, identified by name.
///
/// Two relationships are equal when both names match ignoring case. A
/// relationship missing either name is only ever equal to itself (the same
/// instance), never to a copy.
///
/// # Example
/// ```rust
/// use directory_rbac::Relationship;
///
/// let a = Relationship::new("Teller", "Employee");
/// let b = Relationship::new("TELLER", "employee");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    child: Option<String>,
    parent: Option<String>,
}

impl Relationship {
    /// Create an edge from `child` up to `parent`.
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: Some(child.into()),
            parent: Some(parent.into()),
        }
    }

    /// Create an edge with no names set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the child name.
    pub fn child(&self) -> Option<&str> {
        self.child.as_deref()
    }

    /// Get the parent name.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Set the child name.
    pub fn set_child(&mut self, child: impl Into<String>) {
        self.child = Some(child.into());
    }

    /// Set the parent name.
    pub fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = Some(parent.into());
    }

    /// Both names, if both are present.
    pub fn names(&self) -> Option<(&str, &str)> {
        match (self.child.as_deref(), self.parent.as_deref()) {
            (Some(child), Some(parent)) => Some((child, parent)),
            _ => None,
        }
    }

    /// Check whether both names are present.
    pub fn is_complete(&self) -> bool {
        self.names().is_some()
    }
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (self.names(), other.names()) {
            (Some((c1, p1)), Some((c2, p2))) => eq_ignore_case(c1, c2) && eq_ignore_case(p1, p2),
            _ => false,
        }
    }
}

impl Eq for Relationship {}

impl Hash for Relationship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.child.as_deref().map(str::to_lowercase).hash(state);
        self.parent.as_deref().map(str::to_lowercase).hash(state);
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.child.as_deref().unwrap_or("?"),
            self.parent.as_deref().unwrap_or("?")
        )
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// The edges to add and remove to move a node from one parent set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipEdits {
    /// Edges present in the desired set only.
    pub added: HashSet<Relationship>,
    /// Edges present in the current set only.
    pub removed: HashSet<Relationship>,
}

impl RelationshipEdits {
    /// Diff a node's current parent names against the desired ones.
    ///
    /// Parents that differ only by case are treated as unchanged.
    pub fn between<'a, C, D>(child: &str, current: C, desired: D) -> Self
    where
        C: IntoIterator<Item = &'a String>,
        D: IntoIterator<Item = &'a String>,
    {
        let current: HashSet<Relationship> = current
            .into_iter()
            .map(|parent| Relationship::new(child, parent.as_str()))
            .collect();
        let desired: HashSet<Relationship> = desired
            .into_iter()
            .map(|parent| Relationship::new(child, parent.as_str()))
            .collect();

        Self {
            added: desired.difference(&current).cloned().collect(),
            removed: current.difference(&desired).cloned().collect(),
        }
    }

    /// Check whether there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
