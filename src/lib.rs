//! # Project Index Library
//!
//! This library turns a batch of project records — each naming responsible
//! managers and watchers plus a priority rank — into two derived indexes:
//! one from manager identity to the projects they manage, and one from
//! watcher identity to the projects they watch. Within each identity's list,
//! projects are ordered by ascending priority (a lower number means a higher
//! priority), with ties broken by input order.
//!
//! It is used by the `project-index` command-line tool but can be embedded in
//! any application that needs the same grouping.
//!
//! ## Quick Example
//!
//! ```
//! use project_index::index::build_indexes;
//! use project_index::record;
//!
//! let batch = r#"[
//!     {"name": "A", "priority": 2, "managers": ["m1"], "watchers": ["w1"]},
//!     {"name": "B", "priority": 1, "managers": ["m1"], "watchers": []}
//! ]"#;
//!
//! let records = record::parse(batch).unwrap();
//! let (managers, watchers) = build_indexes(&records);
//!
//! assert_eq!(managers["m1"], vec!["B", "A"]);
//! assert_eq!(watchers["w1"], vec!["A"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`record`)**: the input data model and the loader that
//!   validates a JSON batch into `ProjectRecord` values.
//! - **Index Builder (`index`)**: the pure transformation from records to the
//!   two role indexes. It performs no I/O.
//! - **Writer (`writer`)**: persists a role index to a JSON file, creating
//!   missing directories along the way.
//! - **Errors (`error`)**: the crate-wide error taxonomy. A malformed record
//!   aborts the whole batch; no partial output is produced.
//!
//! ## Execution Flow
//!
//! The CLI's `build` command wires the collaborators together: load records
//! from the input file, call `index::build_indexes`, then write
//! `managers.json` and `watchers.json` to the output directory.

pub mod error;
pub mod index;
pub mod output;
pub mod record;
pub mod writer;

#[cfg(test)]
mod index_proptest;
