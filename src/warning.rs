//! Diagnostics attached to a session.

/// What a [`Warning`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "persistence", serde(rename_all = "UPPERCASE"))]
pub enum WarningType {
    /// A role could not be activated.
    Role,
    /// A password policy condition.
    Password,
}

/// Well-known warning ids.
pub mod ids {
    /// The password expires soon.
    pub const PASSWORD_EXPIRATION_WARNING: i32 = 11;
    /// The user is logging in on grace logins.
    pub const PASSWORD_GRACE_WARNING: i32 = 12;
    /// The password was reset and must be changed.
    pub const PASSWORD_RESET_WARNING: i32 = 13;
    /// A role is outside its activation window.
    pub const ROLE_ACTIVATION_WARNING: i32 = 20;
    /// Activating a role would violate dynamic separation of duty.
    pub const ROLE_DSD_WARNING: i32 = 21;
}

/// A diagnostic code and message.
///
/// When the type is [`WarningType::Role`], `name` identifies the role.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    id: i32,
    msg: String,
    name: Option<String>,
    #[cfg_attr(feature = "persistence", serde(rename = "type"))]
    warning_type: WarningType,
}

impl Warning {
    /// Create a warning.
    pub fn new(id: i32, msg: impl Into<String>, warning_type: WarningType) -> Self {
        Self {
            id,
            msg: msg.into(),
            name: None,
            warning_type,
        }
    }

    /// Create a role warning naming the offending role.
    pub fn role(id: i32, msg: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: Some(role.into()),
            ..Self::new(id, msg, WarningType::Role)
        }
    }

    /// Create a password warning.
    pub fn password(id: i32, msg: impl Into<String>) -> Self {
        Self::new(id, msg, WarningType::Password)
    }

    /// Get the id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Get the message.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The role this warning concerns, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the type.
    pub fn warning_type(&self) -> WarningType {
        self.warning_type
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[{}] {} ({})", self.id, self.msg, name),
            None => write!(f, "[{}] {}", self.id, self.msg),
        }
    }
}
