//! Organizational units.

use crate::graph::{impl_graphable, Graphable};
use std::collections::HashSet;
use uuid::Uuid;

/// Which tree an org unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "persistence", serde(rename_all = "UPPERCASE"))]
pub enum OrgUnitType {
    /// Groups users.
    User,
    /// Groups permissions.
    Perm,
}

impl std::fmt::Display for OrgUnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrgUnitType::User => write!(f, "USER"),
            OrgUnitType::Perm => write!(f, "PERM"),
        }
    }
}

/// A node in the user or permission org-unit hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct OrgUnit {
    name: String,
    internal_id: String,
    description: Option<String>,
    ou_type: OrgUnitType,
    parents: HashSet<String>,
    children: HashSet<String>,
}

impl_graphable!(OrgUnit);

impl OrgUnit {
    /// Create an org unit of the given type.
    pub fn new(name: impl Into<String>, ou_type: OrgUnitType) -> Self {
        Self {
            name: name.into(),
            internal_id: Uuid::new_v4().to_string(),
            description: None,
            ou_type,
            parents: HashSet::new(),
            children: HashSet::new(),
        }
    }

    /// Create a user org unit.
    pub fn user(name: impl Into<String>) -> Self {
        Self::new(name, OrgUnitType::User)
    }

    /// Create a permission org unit.
    pub fn perm(name: impl Into<String>) -> Self {
        Self::new(name, OrgUnitType::Perm)
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a parent org unit.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.set_parent(parent);
        self
    }

    /// Get the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the org unit type.
    pub fn ou_type(&self) -> OrgUnitType {
        self.ou_type
    }

    /// Get the generated identifier.
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }
}
