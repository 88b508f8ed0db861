//! Permission attributes and the named sets role constraints refer to.

use crate::comparison::ComparisonOperator;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// One attribute definition within a [`PermissionAttributeSet`].
///
/// Identity is the attribute name; two definitions with the same name are
/// the same attribute regardless of their other fields.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct PermissionAttribute {
    attribute_name: String,
    data_type: Option<String>,
    required: bool,
    operator: Option<ComparisonOperator>,
    default_value: Option<String>,
    default_strategy: Option<String>,
    valid_values: Vec<String>,
    description: Option<String>,
    internal_id: String,
}

impl PermissionAttribute {
    /// Create an attribute definition with the given name.
    pub fn new(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            data_type: None,
            required: false,
            operator: None,
            default_value: None,
            default_strategy: None,
            valid_values: Vec::new(),
            description: None,
            internal_id: Uuid::new_v4().to_string(),
        }
    }

    /// Set the data type name (e.g. `"string"`, `"int"`).
    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    /// Mark the attribute as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the comparison the evaluator applies to this attribute.
    pub fn with_operator(mut self, operator: ComparisonOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Set the operator from its token. Unknown tokens leave it unset.
    pub fn with_operator_token(mut self, token: &str) -> Self {
        self.operator = ComparisonOperator::from_name(token);
        self
    }

    /// Set the default value.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set how the default is applied.
    pub fn with_default_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.default_strategy = Some(strategy.into());
        self
    }

    /// Add an allowed value.
    pub fn with_valid_value(mut self, value: impl Into<String>) -> Self {
        self.valid_values.push(value.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the attribute name.
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    /// Get the data type name.
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// Whether a value must be supplied.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The comparison operator, if the attribute is comparison-constrained.
    pub fn operator(&self) -> Option<ComparisonOperator> {
        self.operator
    }

    /// Get the default value.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Get the default strategy.
    pub fn default_strategy(&self) -> Option<&str> {
        self.default_strategy.as_deref()
    }

    /// Allowed values. Empty means unrestricted.
    pub fn valid_values(&self) -> &[String] {
        &self.valid_values
    }

    /// Get the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the generated identifier.
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }
}

impl PartialEq for PermissionAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.attribute_name == other.attribute_name
    }
}

impl Eq for PermissionAttribute {}

impl Hash for PermissionAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attribute_name.hash(state);
    }
}

/// A named group of attribute definitions.
///
/// Role constraints name the set their semantics come from. The attribute
/// collection exists from construction, so it is never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct PermissionAttributeSet {
    name: String,
    attributes: HashSet<PermissionAttribute>,
    internal_id: String,
    description: Option<String>,
    dn: Option<String>,
    kind: Option<String>,
}

impl PermissionAttributeSet {
    /// Create an empty set with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashSet::new(),
            internal_id: Uuid::new_v4().to_string(),
            description: None,
            dn: None,
            kind: None,
        }
    }

    /// Add an attribute definition.
    pub fn with_attribute(mut self, attribute: PermissionAttribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the set.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The attribute definitions.
    pub fn attributes(&self) -> &HashSet<PermissionAttribute> {
        &self.attributes
    }

    /// Add an attribute definition. Returns `false` if one with the same name
    /// was already present.
    pub fn add_attribute(&mut self, attribute: PermissionAttribute) -> bool {
        self.attributes.insert(attribute)
    }

    /// Look up an attribute definition by name.
    pub fn attribute(&self, name: &str) -> Option<&PermissionAttribute> {
        self.attributes.iter().find(|a| a.attribute_name() == name)
    }

    /// Get the identifier.
    pub fn internal_id(&self) -> &str {
        &self.internal_id
    }

    /// Replace the identifier with a newly generated one.
    pub fn regenerate_id(&mut self) -> &str {
        self.internal_id = Uuid::new_v4().to_string();
        &self.internal_id
    }

    /// Get the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// The directory location of the set. Opaque to this crate.
    pub fn dn(&self) -> Option<&str> {
        self.dn.as_deref()
    }

    /// Set the directory location.
    pub fn set_dn(&mut self, dn: impl Into<String>) {
        self.dn = Some(dn.into());
    }

    /// Get the kind of set, as tagged by the directory.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Set the kind of set.
    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = Some(kind.into());
    }
}
