//! Property-based testing for the data model.
//!
//! This module uses the `proptest` crate to check the relationship equality
//! contract, the constraint encoding, and hierarchy edits over a wide range
//! of inputs.

#[cfg(test)]
mod tests {
    use crate::{
        comparison::ComparisonOperator,
        constraint::{ConstraintCodec, ConstraintType, RoleConstraint},
        graph::Graphable,
        hierarchy::Hierarchy,
        relationship::{Relationship, RelationshipEdits},
        role::Role,
    };
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    /// Generate valid node names.
    fn name_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_.-]{0,31}").unwrap()
    }

    /// Generate constraint values that never contain the `$` delimiter.
    fn value_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            prop::string::string_regex("[A-Za-z0-9=&._ -]{0,48}").unwrap(),
            (name_strategy(), 0u32..100_000).prop_map(|(k, v)| format!("{k}={v}")),
        ]
    }

    fn constraint_type_strategy() -> impl Strategy<Value = ConstraintType> {
        prop::sample::select(ConstraintType::ALL.to_vec())
    }

    fn hash_of(rel: &Relationship) -> u64 {
        let mut hasher = DefaultHasher::new();
        rel.hash(&mut hasher);
        hasher.finish()
    }

    proptest! {
        #[test]
        fn prop_relationship_case_insensitive(child in name_strategy(), parent in name_strategy()) {
            let lower = Relationship::new(child.to_lowercase(), parent.to_lowercase());
            let upper = Relationship::new(child.to_uppercase(), parent.to_uppercase());
            let original = Relationship::new(child, parent);

            prop_assert_eq!(&original, &upper);
            prop_assert_eq!(&lower, &upper);
            prop_assert_eq!(hash_of(&original), hash_of(&upper));
        }

        #[test]
        fn prop_incomplete_relationship_never_equal(name in name_strategy(), use_child in any::<bool>()) {
            let mut partial = Relationship::empty();
            if use_child {
                partial.set_child(name.clone());
            } else {
                partial.set_parent(name.clone());
            }

            prop_assert!(partial != partial.clone());
            prop_assert!(partial != Relationship::new(name.clone(), name));
        }

        #[test]
        fn prop_constraint_round_trip(
            assignment in name_strategy(),
            constraint_type in constraint_type_strategy(),
            pa_set in prop_oneof![Just(String::new()), name_strategy()],
            value in value_strategy(),
        ) {
            let codec = ConstraintCodec::with_delimiter('$').unwrap();
            let constraint = RoleConstraint::new(constraint_type, pa_set, value);

            let raw = codec.encode(&assignment, &constraint).unwrap();
            let record = codec.decode(&raw).unwrap();

            prop_assert_eq!(record.role_assignment, assignment);
            prop_assert_eq!(record.constraint, constraint);
        }

        #[test]
        fn prop_delimiter_in_value_rejected(prefix in value_strategy(), suffix in value_strategy()) {
            let codec = ConstraintCodec::with_delimiter('$').unwrap();
            let constraint = RoleConstraint::filter("set", format!("{prefix}${suffix}"));
            prop_assert!(codec.encode("role", &constraint).is_err());
        }

        #[test]
        fn prop_operator_lookup_ignores_padding(op in prop::sample::select(ComparisonOperator::ALL.to_vec()), pad in "[ \t]{0,3}") {
            let padded = format!("{pad}{op}{pad}");
            prop_assert_eq!(ComparisonOperator::from_name(&padded), Some(op));
        }

        #[test]
        fn prop_edits_reach_desired_parents(
            current in prop::collection::hash_set(name_strategy(), 0..6),
            desired in prop::collection::hash_set(name_strategy(), 0..6),
        ) {
            let mut roles = Hierarchy::default();
            roles.insert_node(Role::new("child-node-0")).unwrap();
            let all: HashSet<String> = current.iter().chain(desired.iter()).map(|n| n.to_lowercase()).collect();
            for name in &all {
                roles.insert_node(Role::new(format!("p-{name}"))).unwrap();
            }
            let current: Vec<String> = current.iter().map(|n| format!("p-{}", n.to_lowercase())).collect();
            let desired: HashSet<String> = desired.iter().map(|n| format!("p-{}", n.to_lowercase())).collect();

            for parent in &current {
                roles.add_relationship(&Relationship::new("child-node-0", parent.as_str())).unwrap();
            }

            let edits = RelationshipEdits::between("child-node-0", &current, &desired);
            roles.apply(&edits).unwrap();

            let node = roles.node("child-node-0").unwrap();
            let got: HashSet<String> = node.parents().iter().map(|p| p.to_lowercase()).collect();
            prop_assert_eq!(got, desired);
        }
    }
}
