//! Build command implementation
//!
//! The build command executes the full run:
//! 1. Load and validate the input batch of project records
//! 2. Build the manager and watcher indexes in memory
//! 3. Write `managers.json` and `watchers.json` to the output directory
//!
//! A malformed record aborts the run before any output is written.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use project_index::index::build_indexes;
use project_index::output::{emoji, OutputConfig};
use project_index::record;
use project_index::writer;

/// File name of the manager index artifact.
pub const MANAGERS_FILE: &str = "managers.json";
/// File name of the watcher index artifact.
pub const WATCHERS_FILE: &str = "watchers.json";

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the input JSON file containing the project records
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory to write managers.json and watchers.json into
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = "result",
        env = "PROJECT_INDEX_OUTPUT"
    )]
    pub output_dir: PathBuf,

    /// Build the indexes but do not write any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let start_time = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if !args.quiet {
        println!(
            "{} Building project indexes from {}",
            emoji(&out, "🔍", "[SCAN]"),
            args.input.display()
        );
        if args.dry_run {
            println!("{} DRY RUN MODE - No files will be written", emoji(&out, "🔎", "[DRY]"));
        }
    }

    let records = record::from_file(&args.input)?;
    let (managers, watchers) = build_indexes(&records);

    if !args.dry_run {
        writer::write_index(&managers, &args.output_dir.join(MANAGERS_FILE))?;
        writer::write_index(&watchers, &args.output_dir.join(WATCHERS_FILE))?;
    }

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Indexed {} records in {:.2}s",
            emoji(&out, "✅", "[OK]"),
            records.len(),
            duration.as_secs_f64()
        );
        println!("   Manager identities: {}", managers.len());
        println!("   Watcher identities: {}", watchers.len());
        if !args.dry_run {
            println!("   Indexes written to: {}", args.output_dir.display());
        }
    }

    Ok(())
}
