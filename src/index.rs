//! # Project Index Builder
//!
//! This module is the core of the crate: a pure in-memory transformation from
//! a batch of project records into two role-keyed indexes, one for managers
//! and one for watchers.
//!
//! ## Ordering Contract
//!
//! Each identity's project list is sorted by ascending priority of the source
//! records (a lower number means a higher priority). When priorities tie, the
//! relative order of the input records is preserved: accumulation happens in
//! input order and the final sort is stable, so no secondary key is needed.
//!
//! Priority exists purely to determine output order; it is discarded from the
//! result. The builder touches no storage and holds no state between calls —
//! loading the input and persisting the indexes are separate collaborators
//! (`record::from_file` and `writer::write_index`).

use std::collections::BTreeMap;

use crate::record::ProjectRecord;

/// A role index: identity → project names ordered by ascending priority.
///
/// Key order within the index is not part of the contract; a `BTreeMap` is
/// used so serialized output is deterministic across runs.
pub type RoleIndex = BTreeMap<String, Vec<String>>;

/// The two independent groupings produced from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Managers,
    Watchers,
}

impl Role {
    /// The identities a record lists under this role.
    fn identities<'a>(&self, record: &'a ProjectRecord) -> &'a [String] {
        match self {
            Role::Managers => &record.managers,
            Role::Watchers => &record.watchers,
        }
    }
}

/// Build the manager and watcher indexes for a batch of records.
///
/// Every identity appearing under a role in any record becomes a key in that
/// role's index, and its list length equals the number of records listing it.
/// The operation is pure: the same input always yields the same two indexes.
pub fn build_indexes(records: &[ProjectRecord]) -> (RoleIndex, RoleIndex) {
    let managers = build_role_index(records, Role::Managers);
    let watchers = build_role_index(records, Role::Watchers);

    log::debug!(
        "indexed {} records into {} manager and {} watcher identities",
        records.len(),
        managers.len(),
        watchers.len()
    );

    (managers, watchers)
}

/// Build the index for a single role.
///
/// One pass over the records accumulates `(name, priority)` pairs per
/// identity in input order; a stable sort per identity then fixes the final
/// order, and the priorities are projected away.
pub fn build_role_index(records: &[ProjectRecord], role: Role) -> RoleIndex {
    let mut groups: BTreeMap<&str, Vec<(&str, f64)>> = BTreeMap::new();

    for record in records {
        for identity in role.identities(record) {
            groups
                .entry(identity)
                .or_default()
                .push((&record.name, record.priority));
        }
    }

    groups
        .into_iter()
        .map(|(identity, mut entries)| {
            // Finite by construction (the loader rejects non-finite
            // priorities), so total_cmp agrees with numeric order.
            entries.sort_by(|a, b| a.1.total_cmp(&b.1));
            let names = entries.into_iter().map(|(name, _)| name.to_string()).collect();
            (identity.to_string(), names)
        })
        .collect()
}
