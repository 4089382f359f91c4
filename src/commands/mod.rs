//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `project-index` command-line tool. Each subcommand lives in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic, calling into the `project_index` library.

pub mod build;
pub mod check;
pub mod completions;
