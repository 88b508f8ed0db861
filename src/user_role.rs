//! Role assignments.

use crate::{
    constraint::{ConstraintCodec, ConstraintRecord, RoleConstraint},
    error::Result,
};

/// The assignment of a role to a user, with any constraints on it.
///
/// The assignment's name is the role name, and it is the name embedded in
/// every encoded constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRole {
    user_id: String,
    name: String,
    role_constraints: Vec<RoleConstraint>,
}

impl UserRole {
    /// Assign role `name` to `user_id`.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            role_constraints: Vec::new(),
        }
    }

    /// Attach a constraint.
    pub fn with_constraint(mut self, constraint: RoleConstraint) -> Self {
        self.add_constraint(constraint);
        self
    }

    /// Get the user id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the role name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constraints on this assignment.
    pub fn role_constraints(&self) -> &[RoleConstraint] {
        &self.role_constraints
    }

    /// Attach a constraint. Duplicates are ignored.
    pub fn add_constraint(&mut self, constraint: RoleConstraint) {
        if !self.role_constraints.contains(&constraint) {
            self.role_constraints.push(constraint);
        }
    }

    /// Encode every constraint, one directory value each.
    pub fn encoded_constraints(&self, codec: &ConstraintCodec) -> Result<Vec<String>> {
        self.role_constraints
            .iter()
            .map(|c| codec.encode(&self.name, c))
            .collect()
    }

    /// Constraint records for this assignment.
    pub fn records(&self) -> Vec<ConstraintRecord> {
        self.role_constraints
            .iter()
            .map(|c| ConstraintRecord::new(self.name.clone(), c.clone()))
            .collect()
    }

    /// Rebuild the constraints from raw directory values, keeping those that
    /// belong to this assignment.
    pub fn load_constraints<'a, I>(&mut self, codec: &ConstraintCodec, raw: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.role_constraints = codec.decode_for(&self.name, raw)?;
        Ok(())
    }
}
