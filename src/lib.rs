//! # Directory RBAC
//!
//! This crate provides the data model of a directory-backed role-based
//! access control system: the entities that describe roles, admin roles,
//! org units, role assignments, and sessions, plus the envelopes used to
//! move them across a remote-call boundary.
//!
//! ## Features
//!
//! - A shared [`Graphable`] contract for every hierarchy node kind
//! - One generic [`Hierarchy`] engine for roles, admin roles, and org units
//! - Case-insensitive name-level [`Relationship`] edges for graph edits
//! - Attribute-based [`RoleConstraint`]s with a flat directory encoding
//! - The [`ComparisonOperator`] vocabulary used by constraint evaluators
//! - Password-policy warnings on [`Session`]s
//! - Serializable request and response envelopes
//!
//! ## Quick Start
//!
//! ```rust
//! use directory_rbac::{ConstraintCodec, Hierarchy, Relationship, Role, RoleConstraint, UserRole};
//!
//! // Build a role hierarchy
//! let mut roles = Hierarchy::default();
//! roles.insert_node(Role::new("Employee"))?;
//! roles.insert_node(Role::new("Teller"))?;
//! roles.add_relationship(&Relationship::new("Teller", "Employee"))?;
//! assert!(roles.ascendants("teller")?.contains("Employee"));
//!
//! // Constrain an assignment and encode it for the directory
//! let codec = ConstraintCodec::with_delimiter('$')?;
//! let assignment = UserRole::new("jdoe", "Teller")
//!     .with_constraint(RoleConstraint::filter("branch", "BranchId=7"));
//! let stored = assignment.encoded_constraints(&codec)?;
//! assert_eq!(stored, vec!["Teller$type$filter$branch$BranchId=7"]);
//! # Ok::<(), directory_rbac::Error>(())
//! ```
//!
//! ## Audit Logging
//!
//! When the `audit` feature is enabled, hierarchy edits and rejected
//! constraint records are logged through the `log` facade:
//!
//! ```rust
//! use directory_rbac::init_audit_logger;
//!
//! // Initialize logging (must be called early in program execution)
//! init_audit_logger();
//!
//! // Configure log level through RUST_LOG environment variable:
//! // RUST_LOG=info,directory_rbac=debug
//! ```

#[cfg(feature = "audit")]
pub fn init_audit_logger() {
    env_logger::init();
}

pub mod attribute;
pub mod comparison;
pub mod config;
pub mod constraint;
pub mod envelope;
pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod macros;
pub mod org_unit;
pub mod property_tests;
pub mod relationship;
pub mod role;
pub mod session;
pub mod typed_relationship;
pub mod user_role;
pub mod warning;

// Re-export main types for convenience
pub use crate::{
    attribute::{PermissionAttribute, PermissionAttributeSet},
    comparison::ComparisonOperator,
    config::{CodecConfig, ModelConfig, ModelConfigBuilder},
    constraint::{ConstraintCodec, ConstraintRecord, ConstraintType, RoleConstraint},
    envelope::{Entity, Request, RequestBuilder, Response},
    error::{Error, Result},
    graph::Graphable,
    hierarchy::{Hierarchy, HierarchyConfig, HierarchyConfigBuilder, HierarchyNode, HierarchyTree},
    org_unit::{OrgUnit, OrgUnitType},
    relationship::{Relationship, RelationshipEdits},
    role::{AdminRole, Role},
    session::{PasswordMessage, Session},
    typed_relationship::{
        AdminRoleRelationship, OrgUnitRelationship, RoleRelationship, TypedRelationship,
    },
    user_role::UserRole,
    warning::{Warning, WarningType},
};
