//! Convenience macros for building hierarchy edits.

/// Macro for creating name-level edges with a clean syntax.
///
/// # Examples
///
/// ```rust
/// use directory_rbac::relationships;
///
/// let edges = relationships![
///     "Teller" => "Employee",
///     "Manager" => "Teller",
/// ];
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[0].parent(), Some("Employee"));
/// ```
#[macro_export]
macro_rules! relationships {
    ($($child:expr => $parent:expr),* $(,)?) => {
        vec![$(
            $crate::relationship::Relationship::new($child, $parent)
        ),*]
    };
}

/// Macro for creating a parent-name set.
///
/// # Examples
///
/// ```rust
/// use directory_rbac::{parents, Graphable, Role};
///
/// let mut role = Role::new("Manager");
/// role.set_parents(parents!["Teller", "Auditor"]);
/// assert!(role.has_parent("auditor"));
/// ```
#[macro_export]
macro_rules! parents {
    ($($parent:expr),* $(,)?) => {
        {
            let mut set = ::std::collections::HashSet::<String>::new();
            $(
                set.insert(::std::string::String::from($parent));
            )*
            set
        }
    };
}
