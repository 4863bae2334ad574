//! pkgdelta: classified diff reports for installed-package inventories.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pkgdelta::cli::{exit_codes, run_diff, run_list, DiffOptions, ListOptions};
use pkgdelta::reports::ReportFormat;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pkgdelta")]
#[command(version)]
#[command(about = "Classified diff reports for installed-package inventories", long_about = None)]
#[command(after_help = "CLASSIFICATION CODES:
    ++  present in left only          :+  multi-version entry, left only
    --  present in right only         :-  multi-version entry, right only
    ==  same version-release          :=  multi-version entry, both sides
    <<  left older than right
    >>  left newer than right

EXIT CODES:
    0  Success
    1  Differences found (with --fail-on-change)
    2  Error occurred

EXAMPLES:
    # Compare two rpm -qa listings
    pkgdelta diff before.txt after.txt

    # Compare two support bundles, table to a file
    pkgdelta diff old-bundle.tar.gz new-bundle.tar.gz -O delta.txt

    # CI check: fail when anything changed
    pkgdelta diff baseline.txt current.txt -o summary --fail-on-change

    # Inspect what a bundle contains
    pkgdelta list bundle.tar.gz")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Left-side inventory: listing file, support report, directory, or tar archive
    left: PathBuf,

    /// Right-side inventory
    right: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "table")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Omit unchanged (`==` and `:=`) records
    #[arg(long)]
    only_changes: bool,

    /// Exit with code 1 if any difference is found
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    /// Inventory: listing file, support report, directory, or tar archive
    source: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two package inventories
    Diff(DiffArgs),

    /// Print the parsed inventory of a single source
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let outcome = match cli.command {
        Commands::Diff(args) => run_diff(&DiffOptions {
            left: args.left,
            right: args.right,
            format: args.output,
            output_file: args.output_file,
            only_changes: args.only_changes,
            fail_on_change: args.fail_on_change,
            no_color: cli.no_color,
            quiet: cli.quiet,
        }),
        Commands::List(args) => run_list(&ListOptions {
            source: args.source,
            quiet: cli.quiet,
        }),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    };

    match outcome {
        Ok(exit_codes::SUCCESS) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
