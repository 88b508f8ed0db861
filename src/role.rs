//! Role and administrative role definitions.

use crate::{
    error::{Error, Result},
    graph::{impl_graphable, Graphable},
};
use std::collections::HashSet;
use uuid::Uuid;

/// A named role that participates in the role hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    /// Name of the role, unique among roles.
    name: String,
    /// Generated directory identifier.
    internal_id: String,
    /// Optional description of the role.
    description: Option<String>,
    /// Names of direct parent roles.
    parents: HashSet<String>,
    /// Names of direct child roles.
    children: HashSet<String>,
    /// User ids currently assigned this role.
    occupants: Vec<String>,
}

impl_graphable!(Role);

impl Role {
    /// Create a new role with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_id: Uuid::new_v4().to_string(),
            description: None,
            parents: HashSet::new(),
            children: HashSet::new(),
            occupants: Vec::new(),
        }
    }

    /// Get the generated identifier.
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    /// Set the role's description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the role's description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Add a parent role.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.set_parent(parent);
        self
    }

    /// User ids assigned this role.
    pub fn occupants(&self) -> &[String] {
        &self.occupants
    }

    /// Record a user as an occupant.
    pub fn add_occupant(&mut self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        if !self.occupants.contains(&user_id) {
            self.occupants.push(user_id);
        }
    }
}

/// A role granting administrative rights over parts of the directory.
///
/// Admin roles form their own hierarchy, separate from ordinary roles. The
/// org-unit scopes and the role range bound what an occupant may administer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct AdminRole {
    role: Role,
    /// Permission org units this role may administer.
    os_perm_ous: HashSet<String>,
    /// User org units this role may administer.
    os_user_ous: HashSet<String>,
    /// Lowest role in the administered range.
    begin_range: Option<String>,
    /// Highest role in the administered range.
    end_range: Option<String>,
    begin_inclusive: bool,
    end_inclusive: bool,
}

impl AdminRole {
    /// Create a new admin role with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            role: Role::new(name),
            os_perm_ous: HashSet::new(),
            os_user_ous: HashSet::new(),
            begin_range: None,
            end_range: None,
            begin_inclusive: false,
            end_inclusive: false,
        }
    }

    /// The underlying role fields.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Mutable access to the underlying role fields.
    pub fn role_mut(&mut self) -> &mut Role {
        &mut self.role
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.role = self.role.with_description(description);
        self
    }

    /// Add a parent admin role.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.set_parent(parent);
        self
    }

    /// Add a permission org unit to the scope.
    pub fn with_perm_ou(mut self, ou: impl Into<String>) -> Self {
        self.os_perm_ous.insert(ou.into());
        self
    }

    /// Add a user org unit to the scope.
    pub fn with_user_ou(mut self, ou: impl Into<String>) -> Self {
        self.os_user_ous.insert(ou.into());
        self
    }

    /// Permission org units in scope.
    pub fn perm_ous(&self) -> &HashSet<String> {
        &self.os_perm_ous
    }

    /// User org units in scope.
    pub fn user_ous(&self) -> &HashSet<String> {
        &self.os_user_ous
    }

    /// Set the administered role range.
    ///
    /// Both ends must be non-empty.
    pub fn with_role_range(
        mut self,
        begin: impl Into<String>,
        begin_inclusive: bool,
        end: impl Into<String>,
        end_inclusive: bool,
    ) -> Result<Self> {
        let (begin, end) = (begin.into(), end.into());
        if begin.trim().is_empty() || end.trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "Role range bounds cannot be empty".to_string(),
            ));
        }
        self.begin_range = Some(begin);
        self.end_range = Some(end);
        self.begin_inclusive = begin_inclusive;
        self.end_inclusive = end_inclusive;
        Ok(self)
    }

    /// The administered role range as `(begin, begin_inclusive, end, end_inclusive)`.
    pub fn role_range(&self) -> Option<(&str, bool, &str, bool)> {
        match (self.begin_range.as_deref(), self.end_range.as_deref()) {
            (Some(begin), Some(end)) => Some((begin, self.begin_inclusive, end, self.end_inclusive)),
            _ => None,
        }
    }
}

impl Graphable for AdminRole {
    fn name(&self) -> &str {
        self.role.name()
    }

    fn parents(&self) -> &HashSet<String> {
        self.role.parents()
    }

    fn parents_mut(&mut self) -> &mut HashSet<String> {
        self.role.parents_mut()
    }

    fn children(&self) -> &HashSet<String> {
        self.role.children()
    }

    fn children_mut(&mut self) -> &mut HashSet<String> {
        self.role.children_mut()
    }
}
