//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which validates an input
//! file of project records without producing any output artifacts.
//!
//! ## Functionality
//!
//! - **Input Validation**: Parses the input file and validates the shape of
//!   every record, reporting the first malformed record with its position.
//! - **Batch Summary**: Prints record and identity counts so the operator can
//!   sanity-check the batch before a real build.
//!
//! This command is a safe, read-only operation that does not write any files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use project_index::index::build_indexes;
use project_index::output::{emoji, OutputConfig};
use project_index::record;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the input JSON file containing the project records
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Execute the `check` command.
///
/// Parses and validates the input batch, then prints a summary. Fails with
/// the underlying validation error when the batch is invalid.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Checking input: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.input.display()
    );

    let records = match record::from_file(&args.input) {
        Ok(records) => {
            println!("{} Input parsed successfully", emoji(&out, "✅", "[OK]"));
            records
        }
        Err(e) => {
            println!("{} Input validation failed: {}", emoji(&out, "❌", "[ERR]"), e);
            return Err(anyhow::anyhow!("Input validation failed: {}", e));
        }
    };

    let (managers, watchers) = build_indexes(&records);
    let manager_refs: usize = records.iter().map(|r| r.managers.len()).sum();
    let watcher_refs: usize = records.iter().map(|r| r.watchers.len()).sum();

    println!("\n{} Batch Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Project records: {}", records.len());
    println!(
        "   Manager identities: {} ({} references)",
        managers.len(),
        manager_refs
    );
    println!(
        "   Watcher identities: {} ({} references)",
        watchers.len(),
        watcher_refs
    );

    println!("\n{} Input is valid", emoji(&out, "✅", "[OK]"));
    Ok(())
}
