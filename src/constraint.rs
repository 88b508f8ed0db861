//! Attribute-based role constraints and their directory encoding.
//!
//! A constraint is stored as one value of a multi-valued directory attribute.
//! The record embeds the name of the role assignment it belongs to, so one
//! attribute can hold constraints for several assignments on the same entry:
//!
//! ```text
//! <role assignment> $ type $ <constraint type> $ <attribute set> $ <value>
//! ```
//!
//! `$` stands for the configured delimiter. The literal `type` marker fixes
//! the layout of the fields that follow it; a new record kind gets a new
//! marker and its own layout.

use crate::{
    config::{self, CodecConfig},
    error::{Error, Result},
};

#[cfg(feature = "audit")]
use log::{debug, warn};

/// Marker for the record layout this codec reads and writes.
pub const TYPE_MARKER: &str = "type";

// Field positions of a `type` record.
const ROLE_ASSIGNMENT: usize = 0;
const MARKER: usize = 1;
const CONSTRAINT_TYPE: usize = 2;
const PA_SET_NAME: usize = 3;
const VALUE: usize = 4;
const FIELD_COUNT: usize = 5;

/// The kind of a role constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "persistence", serde(rename_all = "lowercase"))]
pub enum ConstraintType {
    /// Restricts the assignment by attribute filter.
    Filter,
    /// Applies to the user holding the assignment.
    User,
    /// Anything the evaluator defines outside the above.
    Other,
}

impl ConstraintType {
    /// Every registered constraint type.
    pub const ALL: [ConstraintType; 3] = [
        ConstraintType::Filter,
        ConstraintType::User,
        ConstraintType::Other,
    ];

    /// The stored token.
    pub const fn token(self) -> &'static str {
        match self {
            ConstraintType::Filter => "filter",
            ConstraintType::User => "user",
            ConstraintType::Other => "other",
        }
    }

    /// Look up a constraint type by its exact token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }
}

impl std::fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for ConstraintType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_token(s).ok_or_else(|| Error::UnknownConstraintType(s.to_string()))
    }
}

/// An attribute-based restriction attached to a role assignment.
///
/// The value is opaque here. It often carries `key=value&key2=value2`
/// pairs, but only the evaluator interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleConstraint {
    constraint_type: ConstraintType,
    pa_set_name: String,
    value: String,
}

impl RoleConstraint {
    /// Create a constraint drawing on the named attribute set.
    pub fn new(
        constraint_type: ConstraintType,
        pa_set_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            constraint_type,
            pa_set_name: pa_set_name.into(),
            value: value.into(),
        }
    }

    /// Create a `filter` constraint.
    pub fn filter(pa_set_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ConstraintType::Filter, pa_set_name, value)
    }

    /// Get the constraint type.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Name of the permission attribute set.
    pub fn pa_set_name(&self) -> &str {
        &self.pa_set_name
    }

    /// The raw constraint value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A decoded constraint together with the role assignment it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintRecord {
    /// Name of the owning role assignment.
    pub role_assignment: String,
    /// The constraint itself.
    pub constraint: RoleConstraint,
}

impl ConstraintRecord {
    /// Pair a constraint with its role assignment.
    pub fn new(role_assignment: impl Into<String>, constraint: RoleConstraint) -> Self {
        Self {
            role_assignment: role_assignment.into(),
            constraint,
        }
    }
}

/// Encodes and decodes constraint records.
///
/// # Example
/// ```rust
/// use directory_rbac::{ConstraintCodec, RoleConstraint};
///
/// let codec = ConstraintCodec::with_delimiter('$')?;
/// let constraint = RoleConstraint::filter("ecomm.merchant.id", "AccountId=12345");
/// let raw = codec.encode("BANK_USER", &constraint)?;
/// assert_eq!(raw, "BANK_USER$type$filter$ecomm.merchant.id$AccountId=12345");
///
/// let record = codec.decode(&raw)?;
/// assert_eq!(record.constraint, constraint);
/// # Ok::<(), directory_rbac::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintCodec {
    delimiter: char,
}

impl Default for ConstraintCodec {
    /// A codec using the process-wide delimiter.
    fn default() -> Self {
        Self::new(&config::global().codec)
    }
}

impl ConstraintCodec {
    /// Create a codec from a configuration. [`CodecConfig`] values are
    /// validated on construction.
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            delimiter: config.delimiter(),
        }
    }

    /// Create a codec with an explicit delimiter.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        Ok(Self::new(&CodecConfig::new(delimiter)?))
    }

    /// The delimiter in use.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Encode a constraint for the named role assignment.
    ///
    /// Empty attribute-set names and values are kept as empty fields. Any
    /// field containing the delimiter is rejected.
    pub fn encode(&self, role_assignment: &str, constraint: &RoleConstraint) -> Result<String> {
        if role_assignment.is_empty() {
            return Err(Error::MalformedConstraint(
                "role assignment name is empty".to_string(),
            ));
        }
        self.check_field("role_assignment", role_assignment)?;
        self.check_field("pa_set_name", &constraint.pa_set_name)?;
        self.check_field("value", &constraint.value)?;

        let mut fields = [""; FIELD_COUNT];
        fields[ROLE_ASSIGNMENT] = role_assignment;
        fields[MARKER] = TYPE_MARKER;
        fields[CONSTRAINT_TYPE] = constraint.constraint_type.token();
        fields[PA_SET_NAME] = &constraint.pa_set_name;
        fields[VALUE] = &constraint.value;

        let delimiter = self.delimiter.to_string();
        Ok(fields.join(delimiter.as_str()))
    }

    /// Encode a record.
    pub fn encode_record(&self, record: &ConstraintRecord) -> Result<String> {
        self.encode(&record.role_assignment, &record.constraint)
    }

    /// Decode a stored record.
    ///
    /// The record must have exactly the fields of a `type` record; an
    /// unknown marker or constraint type fails the whole record.
    pub fn decode(&self, raw: &str) -> Result<ConstraintRecord> {
        let fields: Vec<&str> = raw.split(self.delimiter).collect();
        if fields.len() != FIELD_COUNT {
            #[cfg(feature = "audit")]
            warn!(
                "Rejected constraint record with {} fields (expected {FIELD_COUNT})",
                fields.len()
            );
            return Err(Error::MalformedConstraint(format!(
                "expected {FIELD_COUNT} fields separated by '{}', found {}",
                self.delimiter,
                fields.len()
            )));
        }

        if fields[ROLE_ASSIGNMENT].is_empty() {
            return Err(Error::MalformedConstraint(
                "role assignment name is empty".to_string(),
            ));
        }
        if fields[MARKER] != TYPE_MARKER {
            return Err(Error::UnknownConstraintMarker(fields[MARKER].to_string()));
        }
        let constraint_type = fields[CONSTRAINT_TYPE].parse::<ConstraintType>()?;

        #[cfg(feature = "audit")]
        debug!(
            "Decoded '{constraint_type}' constraint for role assignment '{}'",
            fields[ROLE_ASSIGNMENT]
        );

        Ok(ConstraintRecord {
            role_assignment: fields[ROLE_ASSIGNMENT].to_string(),
            constraint: RoleConstraint::new(
                constraint_type,
                fields[PA_SET_NAME],
                fields[VALUE],
            ),
        })
    }

    /// Decode only the records belonging to one role assignment.
    ///
    /// Assignment names are compared ignoring case. Records that fail to
    /// decode are errors, not skipped.
    pub fn decode_for<'a, I>(&self, role_assignment: &str, raw: I) -> Result<Vec<RoleConstraint>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted = role_assignment.to_lowercase();
        let mut constraints = Vec::new();
        for value in raw {
            let record = self.decode(value)?;
            if record.role_assignment.to_lowercase() == wanted {
                constraints.push(record.constraint);
            }
        }
        Ok(constraints)
    }

    fn check_field(&self, field: &'static str, value: &str) -> Result<()> {
        if value.contains(self.delimiter) {
            #[cfg(feature = "audit")]
            warn!("Rejected constraint: field '{field}' contains the delimiter");
            return Err(Error::ReservedDelimiter {
                field,
                delimiter: self.delimiter,
            });
        }
        Ok(())
    }
}
