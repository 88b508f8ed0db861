//! Sessions and the password-message capability.
//!
//! Password-policy outcomes reach callers through [`PasswordMessage`], which
//! the session implements. Ids below [`ERROR_THRESHOLD`] are informational
//! or warnings; ids at or above it are errors.

use crate::{user_role::UserRole, warning::Warning};
use uuid::Uuid;

/// First id in the error range.
pub const ERROR_THRESHOLD: i32 = 100;

/// Access to the password-policy result of an authentication.
///
/// [`set_warning`](Self::set_warning) appends to the warning list and
/// [`set_warnings`](Self::set_warnings) replaces it.
/// [`warning`](Self::warning) returns the most recently added warning.
pub trait PasswordMessage {
    /// The user the message concerns.
    fn user_id(&self) -> &str;

    /// Set the user.
    fn set_user_id(&mut self, user_id: String);

    /// The current message, if any.
    fn msg(&self) -> Option<&str>;

    /// Set the current message.
    fn set_msg(&mut self, msg: String);

    /// Whether authentication succeeded.
    fn is_authenticated(&self) -> bool;

    /// Set the authentication result.
    fn set_authenticated(&mut self, authenticated: bool);

    /// All warnings, oldest first.
    fn warnings(&self) -> &[Warning];

    /// Replace the warning list.
    fn set_warnings(&mut self, warnings: Vec<Warning>);

    /// Append one warning.
    fn set_warning(&mut self, warning: Warning);

    /// The most recent warning.
    fn warning(&self) -> Option<&Warning> {
        self.warnings().last()
    }

    /// The error or warning id. Zero when nothing was reported.
    fn error_id(&self) -> i32;

    /// Set the error or warning id.
    fn set_error_id(&mut self, error_id: i32);

    /// Whether the id is in the error range.
    fn is_error(&self) -> bool {
        self.error_id() >= ERROR_THRESHOLD
    }

    /// Grace logins remaining after password expiry, if the policy allows any.
    fn grace_logins(&self) -> Option<u32>;

    /// Set the remaining grace logins.
    fn set_grace_logins(&mut self, grace_logins: Option<u32>);

    /// Seconds until the password expires, if it expires.
    fn expiration_seconds(&self) -> Option<u64>;

    /// Set the seconds until expiry.
    fn set_expiration_seconds(&mut self, seconds: Option<u64>);
}

/// The result of authenticating a user, carrying the roles activated for
/// the session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    session_id: String,
    user_id: String,
    authenticated: bool,
    msg: Option<String>,
    warnings: Vec<Warning>,
    error_id: i32,
    grace_logins: Option<u32>,
    expiration_seconds: Option<u64>,
    user_roles: Vec<UserRole>,
    admin_roles: Vec<String>,
}

impl Session {
    /// Create an unauthenticated session for a user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            authenticated: false,
            msg: None,
            warnings: Vec::new(),
            error_id: 0,
            grace_logins: None,
            expiration_seconds: None,
            user_roles: Vec::new(),
            admin_roles: Vec::new(),
        }
    }

    /// Get the session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Activated role assignments.
    pub fn user_roles(&self) -> &[UserRole] {
        &self.user_roles
    }

    /// Activate a role assignment. A role already active is replaced.
    pub fn add_user_role(&mut self, user_role: UserRole) {
        let lowered = user_role.name().to_lowercase();
        self.user_roles.retain(|r| r.name().to_lowercase() != lowered);
        self.user_roles.push(user_role);
    }

    /// Deactivate a role by name. Returns whether it was active.
    pub fn remove_user_role(&mut self, name: &str) -> bool {
        let before = self.user_roles.len();
        let lowered = name.to_lowercase();
        self.user_roles.retain(|r| r.name().to_lowercase() != lowered);
        self.user_roles.len() != before
    }

    /// Names of the activated roles.
    pub fn role_names(&self) -> Vec<&str> {
        self.user_roles.iter().map(UserRole::name).collect()
    }

    /// Activated admin role names.
    pub fn admin_roles(&self) -> &[String] {
        &self.admin_roles
    }

    /// Activate an admin role.
    pub fn add_admin_role(&mut self, name: impl Into<String>) {
        let name = name.into();
        let lowered = name.to_lowercase();
        if !self.admin_roles.iter().any(|r| r.to_lowercase() == lowered) {
            self.admin_roles.push(name);
        }
    }
}

impl PasswordMessage for Session {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn set_user_id(&mut self, user_id: String) {
        self.user_id = user_id;
    }

    fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    fn set_msg(&mut self, msg: String) {
        self.msg = Some(msg);
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    fn set_warnings(&mut self, warnings: Vec<Warning>) {
        self.warnings = warnings;
    }

    fn set_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    fn error_id(&self) -> i32 {
        self.error_id
    }

    fn set_error_id(&mut self, error_id: i32) {
        self.error_id = error_id;
    }

    fn grace_logins(&self) -> Option<u32> {
        self.grace_logins
    }

    fn set_grace_logins(&mut self, grace_logins: Option<u32>) {
        self.grace_logins = grace_logins;
    }

    fn expiration_seconds(&self) -> Option<u64> {
        self.expiration_seconds
    }

    fn set_expiration_seconds(&mut self, seconds: Option<u64>) {
        self.expiration_seconds = seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warning::{ids, WarningType};

    #[test]
    fn test_set_warning_appends() {
        let mut session = Session::new("jdoe");
        session.set_warning(Warning::password(ids::PASSWORD_EXPIRATION_WARNING, "expiring"));
        session.set_warning(Warning::role(ids::ROLE_DSD_WARNING, "dsd", "Auditor"));

        assert_eq!(session.warnings().len(), 2);
        assert_eq!(session.warning().map(Warning::id), Some(ids::ROLE_DSD_WARNING));
    }

    #[test]
    fn test_set_warnings_replaces() {
        let mut session = Session::new("jdoe");
        session.set_warning(Warning::password(ids::PASSWORD_GRACE_WARNING, "grace"));
        session.set_warnings(vec![Warning::role(ids::ROLE_ACTIVATION_WARNING, "window", "Teller")]);

        assert_eq!(session.warnings().len(), 1);
        assert_eq!(session.warnings()[0].warning_type(), WarningType::Role);

        session.set_warnings(Vec::new());
        assert!(session.warning().is_none());
    }

    #[test]
    fn test_error_range() {
        let mut session = Session::new("jdoe");
        assert!(!session.is_error());
        session.set_error_id(ids::PASSWORD_GRACE_WARNING);
        assert!(!session.is_error());
        session.set_error_id(ERROR_THRESHOLD);
        assert!(session.is_error());
    }

    #[test]
    fn test_roles() {
        let mut session = Session::new("jdoe");
        session.add_user_role(UserRole::new("jdoe", "Teller"));
        session.add_user_role(UserRole::new("jdoe", "teller"));
        session.add_admin_role("BankAdmin");
        session.add_admin_role("bankadmin");

        assert_eq!(session.role_names(), vec!["teller"]);
        assert_eq!(session.admin_roles().len(), 1);
        assert!(session.remove_user_role("TELLER"));
        assert!(!session.remove_user_role("TELLER"));
    }

    #[test]
    fn test_role_names_fold_non_ascii_case() {
        let mut session = Session::new("jdoe");
        session.add_user_role(UserRole::new("jdoe", "Überprüfer"));
        session.add_user_role(UserRole::new("jdoe", "ÜBERPRÜFER"));
        session.add_admin_role("Ärzte");
        session.add_admin_role("ärzte");

        assert_eq!(session.role_names(), vec!["ÜBERPRÜFER"]);
        assert_eq!(session.admin_roles().len(), 1);
        assert!(session.remove_user_role("überprüfer"));
        assert!(session.user_roles().is_empty());
    }

    #[test]
    fn test_password_fields() {
        let mut session = Session::new("jdoe");
        session.set_authenticated(true);
        session.set_msg("ok".to_string());
        session.set_grace_logins(Some(2));
        session.set_expiration_seconds(Some(3600));

        assert!(session.is_authenticated());
        assert_eq!(session.msg(), Some("ok"));
        assert_eq!(session.grace_logins(), Some(2));
        assert_eq!(session.expiration_seconds(), Some(3600));
        assert!(!session.session_id().is_empty());
    }
}
