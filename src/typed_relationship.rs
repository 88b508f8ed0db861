//! Relationships carrying complete parent and child entities.
//!
//! Remote callers that need full payloads rather than bare names send these
//! across the transfer boundary. [`Relationship`] remains the type used for
//! internal graph edits; [`TypedRelationship::to_relationship`] converts.

use crate::{
    graph::Graphable,
    org_unit::OrgUnit,
    relationship::Relationship,
    role::{AdminRole, Role},
};

/// A parent/child pair of full nodes of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct TypedRelationship<N> {
    parent: N,
    child: N,
}

/// Role-to-role relationship.
pub type RoleRelationship = TypedRelationship<Role>;
/// Admin-role-to-admin-role relationship.
pub type AdminRoleRelationship = TypedRelationship<AdminRole>;
/// Org-unit-to-org-unit relationship.
pub type OrgUnitRelationship = TypedRelationship<OrgUnit>;

impl<N> TypedRelationship<N> {
    /// Pair a parent with a child.
    pub fn new(parent: N, child: N) -> Self {
        Self { parent, child }
    }

    /// Get the parent.
    pub fn parent(&self) -> &N {
        &self.parent
    }

    /// Get the child.
    pub fn child(&self) -> &N {
        &self.child
    }

    /// Replace the parent.
    pub fn set_parent(&mut self, parent: N) {
        self.parent = parent;
    }

    /// Replace the child.
    pub fn set_child(&mut self, child: N) {
        self.child = child;
    }

    /// Split into `(parent, child)`.
    pub fn into_parts(self) -> (N, N) {
        (self.parent, self.child)
    }
}

impl<N: Graphable> TypedRelationship<N> {
    /// The name-level edge between the two nodes.
    pub fn to_relationship(&self) -> Relationship {
        Relationship::new(self.child.name(), self.parent.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_relationship_to_edge() {
        let rel = RoleRelationship::new(Role::new("Employee"), Role::new("Teller"));
        assert_eq!(rel.parent().name(), "Employee");
        assert_eq!(rel.to_relationship(), Relationship::new("teller", "employee"));
    }

    #[test]
    fn test_org_unit_relationship_parts() {
        let rel = OrgUnitRelationship::new(OrgUnit::user("corp"), OrgUnit::user("east"));
        let (parent, child) = rel.into_parts();
        assert_eq!(parent.name(), "corp");
        assert_eq!(child.name(), "east");
    }

    #[test]
    fn test_admin_role_relationship() {
        let mut rel = AdminRoleRelationship::new(AdminRole::new("Senior"), AdminRole::new("Junior"));
        rel.set_child(AdminRole::new("Intern"));
        assert_eq!(rel.to_relationship().child(), Some("Intern"));
    }
}
