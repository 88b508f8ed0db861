//! Request and response envelopes for the remote-call boundary.
//!
//! One request and one response per call. The envelopes are deliberately
//! not `Clone`: build one, hand it off, and let the receiving call own it.

use crate::{
    attribute::{PermissionAttribute, PermissionAttributeSet},
    constraint::RoleConstraint,
    org_unit::OrgUnit,
    relationship::Relationship,
    role::{AdminRole, Role},
    session::Session,
    typed_relationship::{AdminRoleRelationship, OrgUnitRelationship, RoleRelationship},
    user_role::UserRole,
    warning::Warning,
};
use std::collections::HashSet;

#[cfg(feature = "persistence")]
use crate::error::Result;

/// Any entity an envelope can carry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    /// A role.
    Role(Role),
    /// An admin role.
    AdminRole(AdminRole),
    /// An org unit.
    OrgUnit(OrgUnit),
    /// A name-level edge.
    Relationship(Relationship),
    /// A role-to-role edge with full payloads.
    RoleRelationship(Box<RoleRelationship>),
    /// An admin-role edge with full payloads.
    AdminRoleRelationship(Box<AdminRoleRelationship>),
    /// An org-unit edge with full payloads.
    OrgUnitRelationship(Box<OrgUnitRelationship>),
    /// A role assignment.
    UserRole(UserRole),
    /// A role constraint.
    RoleConstraint(RoleConstraint),
    /// A permission attribute set.
    PermissionAttributeSet(PermissionAttributeSet),
    /// A single permission attribute.
    PermissionAttribute(PermissionAttribute),
    /// A session warning.
    Warning(Warning),
}

macro_rules! entity_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Entity {
                fn from(value: $ty) -> Self {
                    Entity::$variant(value)
                }
            }
        )*
    };
}

entity_from! {
    Role => Role,
    AdminRole => AdminRole,
    OrgUnit => OrgUnit,
    Relationship => Relationship,
    UserRole => UserRole,
    RoleConstraint => RoleConstraint,
    PermissionAttributeSet => PermissionAttributeSet,
    PermissionAttribute => PermissionAttribute,
    Warning => Warning,
}

impl From<RoleRelationship> for Entity {
    fn from(value: RoleRelationship) -> Self {
        Entity::RoleRelationship(Box::new(value))
    }
}

impl From<AdminRoleRelationship> for Entity {
    fn from(value: AdminRoleRelationship) -> Self {
        Entity::AdminRoleRelationship(Box::new(value))
    }
}

impl From<OrgUnitRelationship> for Entity {
    fn from(value: OrgUnitRelationship) -> Self {
        Entity::OrgUnitRelationship(Box::new(value))
    }
}

impl Entity {
    /// Short name of the entity kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Role(_) => "role",
            Entity::AdminRole(_) => "admin_role",
            Entity::OrgUnit(_) => "org_unit",
            Entity::Relationship(_) => "relationship",
            Entity::RoleRelationship(_) => "role_relationship",
            Entity::AdminRoleRelationship(_) => "admin_role_relationship",
            Entity::OrgUnitRelationship(_) => "org_unit_relationship",
            Entity::UserRole(_) => "user_role",
            Entity::RoleConstraint(_) => "role_constraint",
            Entity::PermissionAttributeSet(_) => "permission_attribute_set",
            Entity::PermissionAttribute(_) => "permission_attribute",
            Entity::Warning(_) => "warning",
        }
    }
}

/// An inbound call.
#[derive(Debug, Default)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    entity: Option<Entity>,
    entity2: Option<Entity>,
    value: Option<String>,
    limit: Option<u16>,
    context_id: Option<String>,
    session: Option<Session>,
    replace: bool,
}

impl Request {
    /// Start building a request.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// The primary entity.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// Take the primary entity out of the request.
    pub fn take_entity(&mut self) -> Option<Entity> {
        self.entity.take()
    }

    /// The secondary entity.
    pub fn entity2(&self) -> Option<&Entity> {
        self.entity2.as_ref()
    }

    /// Take the secondary entity out of the request.
    pub fn take_entity2(&mut self) -> Option<Entity> {
        self.entity2.take()
    }

    /// Free-form value, such as a search pattern.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Maximum number of results.
    pub fn limit(&self) -> Option<u16> {
        self.limit
    }

    /// Tenant or context identifier.
    pub fn context_id(&self) -> Option<&str> {
        self.context_id.as_deref()
    }

    /// The caller's session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the call replaces rather than merges.
    pub fn is_replace(&self) -> bool {
        self.replace
    }

    /// Serialize to JSON.
    #[cfg(feature = "persistence")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    #[cfg(feature = "persistence")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for [`Request`].
///
/// # Example
/// ```rust
/// use directory_rbac::{Request, Role};
///
/// let request = Request::builder()
///     .entity(Role::new("Teller"))
///     .context_id("bank")
///     .limit(50)
///     .build();
/// assert_eq!(request.limit(), Some(50));
/// ```
#[derive(Debug, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Set the primary entity.
    pub fn entity(mut self, entity: impl Into<Entity>) -> Self {
        self.request.entity = Some(entity.into());
        self
    }

    /// Set the secondary entity.
    pub fn entity2(mut self, entity: impl Into<Entity>) -> Self {
        self.request.entity2 = Some(entity.into());
        self
    }

    /// Set the free-form value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.request.value = Some(value.into());
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u16) -> Self {
        self.request.limit = Some(limit);
        self
    }

    /// Set the tenant or context identifier.
    pub fn context_id(mut self, context_id: impl Into<String>) -> Self {
        self.request.context_id = Some(context_id.into());
        self
    }

    /// Attach the caller's session.
    pub fn session(mut self, session: Session) -> Self {
        self.request.session = Some(session);
        self
    }

    /// Set the replace flag.
    pub fn replace(mut self, replace: bool) -> Self {
        self.request.replace = replace;
        self
    }

    /// Build the request.
    pub fn build(self) -> Request {
        self.request
    }
}

/// The reply to a [`Request`].
///
/// An error code of zero is success. Any other code is a failure described
/// by the error message; the code space belongs to the service layer.
#[derive(Debug, Default)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    error_code: i32,
    error_message: Option<String>,
    authorized: bool,
    entity: Option<Entity>,
    entities: Vec<Entity>,
    values: Vec<String>,
    value_set: HashSet<String>,
    session: Option<Session>,
}

impl Response {
    /// An empty successful response.
    pub fn success() -> Self {
        Self::default()
    }

    /// A failed response.
    pub fn failure(error_code: i32, error_message: impl Into<String>) -> Self {
        Self {
            error_code,
            error_message: Some(error_message.into()),
            ..Self::default()
        }
    }

    /// Set the primary entity.
    pub fn with_entity(mut self, entity: impl Into<Entity>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity list.
    pub fn with_entities<I, E>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entity>,
    {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the string list.
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    /// Set the string set.
    pub fn with_value_set(mut self, value_set: HashSet<String>) -> Self {
        self.value_set = value_set;
        self
    }

    /// Set the authorization decision.
    pub fn with_authorized(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }

    /// Attach a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Get the error code.
    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    /// Get the error message.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Get the authorization decision.
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// The primary entity.
    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }

    /// The entity list.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The string list.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The string set.
    pub fn value_set(&self) -> &HashSet<String> {
        &self.value_set
    }

    /// The session.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Take the session out of the response.
    pub fn take_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// Serialize to JSON.
    #[cfg(feature = "persistence")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON.
    #[cfg(feature = "persistence")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
