//! Property-based tests for the index builder.
//!
//! These tests use proptest to generate random record batches and verify
//! that the ordering and grouping invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::index::{build_indexes, build_role_index, Role};
    use crate::record::ProjectRecord;
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// A small identity pool so that generated batches share identities
    /// across records, exercising the grouping paths.
    fn identity_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]", 0..4)
    }

    /// A batch of records with unique, position-derived names so tests can
    /// map an output name back to its source record.
    fn record_batch() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec((-50i32..50, identity_list(), identity_list()), 0..20).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, (priority, managers, watchers))| ProjectRecord {
                        name: format!("p{}", i),
                        priority: f64::from(priority),
                        managers,
                        watchers,
                    })
                    .collect()
            },
        )
    }

    proptest! {
        /// Property: every identity listed under a role in any record is a
        /// key in that role's index, and its list length equals the number
        /// of records listing it.
        #[test]
        fn grouping_is_complete(records in record_batch()) {
            let (managers, watchers) = build_indexes(&records);

            for (index, role) in [(&managers, Role::Managers), (&watchers, Role::Watchers)] {
                let mut expected_counts: HashMap<&str, usize> = HashMap::new();
                for record in &records {
                    let identities = match role {
                        Role::Managers => &record.managers,
                        Role::Watchers => &record.watchers,
                    };
                    for identity in identities {
                        *expected_counts.entry(identity).or_default() += 1;
                    }
                }

                prop_assert_eq!(index.len(), expected_counts.len());
                for (identity, count) in expected_counts {
                    let names = index.get(identity);
                    prop_assert!(names.is_some(), "identity '{}' missing from index", identity);
                    prop_assert_eq!(names.unwrap().len(), count);
                }
            }
        }

        /// Property: within each identity's list, source priorities are
        /// non-decreasing in the order the names appear.
        #[test]
        fn output_is_sorted_by_priority(records in record_batch()) {
            let priority_of: HashMap<&str, f64> = records
                .iter()
                .map(|r| (r.name.as_str(), r.priority))
                .collect();

            let (managers, watchers) = build_indexes(&records);

            for index in [&managers, &watchers] {
                for (identity, names) in index {
                    for pair in names.windows(2) {
                        prop_assert!(
                            priority_of[pair[0].as_str()] <= priority_of[pair[1].as_str()],
                            "identity '{}' has '{}' before '{}' despite higher priority value",
                            identity,
                            pair[0],
                            pair[1]
                        );
                    }
                }
            }
        }

        /// Property: when every record has the same priority, each identity's
        /// list preserves input record order exactly (stability).
        #[test]
        fn ties_preserve_input_order(
            entries in prop::collection::vec(identity_list(), 0..20),
        ) {
            let records: Vec<ProjectRecord> = entries
                .into_iter()
                .enumerate()
                .map(|(i, managers)| ProjectRecord {
                    name: format!("p{}", i),
                    priority: 1.0,
                    managers,
                    watchers: Vec::new(),
                })
                .collect();

            let index = build_role_index(&records, Role::Managers);

            for (identity, names) in &index {
                let expected: Vec<&str> = records
                    .iter()
                    .filter(|r| r.managers.iter().any(|m| m == identity))
                    .map(|r| r.name.as_str())
                    .collect();
                prop_assert_eq!(names.iter().map(String::as_str).collect::<Vec<_>>(), expected);
            }
        }

        /// Property: building twice from the same input yields identical
        /// indexes (idempotence / purity).
        #[test]
        fn build_is_idempotent(records in record_batch()) {
            prop_assert_eq!(build_indexes(&records), build_indexes(&records));
        }

        /// Property: the two roles are independent — dropping all watcher
        /// lists changes nothing in the manager index.
        #[test]
        fn roles_are_independent(records in record_batch()) {
            let (managers, _) = build_indexes(&records);

            let managers_only: Vec<ProjectRecord> = records
                .iter()
                .map(|r| ProjectRecord { watchers: Vec::new(), ..r.clone() })
                .collect();
            let (managers_again, watchers) = build_indexes(&managers_only);

            prop_assert_eq!(managers, managers_again);
            prop_assert!(watchers.is_empty());
        }
    }
}
