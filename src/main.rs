//! Thin CLI shell over the `pgdiff` library: one subcommand, `sync`, that
//! reads a target schema from stdin, diffs it against a live database, and
//! prints the resulting migration script.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use pgdiff::{catalog, db, plan, scratch::ScratchDatabase};

/// Compute and print the SQL needed to bring a live database in line with a
/// target schema read from stdin.
#[derive(Parser)]
#[command(name = "pgdiff", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Diff a live database against target DDL read from stdin and print
    /// the SQL statements that converge it.
    Sync(SyncArgs),
}

#[derive(Parser)]
struct SyncArgs {
    /// Connection string for the live database.
    dsn: String,

    /// Restrict inspection to schemas matching one of these glob patterns
    /// (repeatable). With none given, every non-system schema is inspected.
    #[arg(long, short = 's')]
    schemas: Vec<String>,

    /// Enable verbose output (info level).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only).
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    let Command::Sync(args) = cli.command;
    initialize_logging(&args);

    match run(&args).await {
        Ok(statement_count) => {
            if statement_count > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            error!("{e:?}");
            Err(e)
        }
    }
}

fn initialize_logging(args: &SyncArgs) {
    let level = if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Runs the `sync` pipeline end to end, returning the number of statements
/// printed (0 means source and target already match).
async fn run(args: &SyncArgs) -> Result<usize> {
    let mut target_ddl = String::new();
    std::io::stdin()
        .read_to_string(&mut target_ddl)
        .context("reading target schema DDL from stdin")?;

    info!("provisioning scratch database for target schema");
    let scratch = ScratchDatabase::provision(&target_ddl).await?;

    let sync_result = sync(args, scratch.dsn()).await;

    if let Err(e) = scratch.teardown().await {
        error!("failed to tear down scratch database: {e:?}");
    }

    let statements = sync_result?;
    if !statements.is_empty() {
        println!("{}", statements.join("\n\n"));
    }
    Ok(statements.len())
}

async fn sync(args: &SyncArgs, scratch_dsn: &str) -> Result<Vec<String>> {
    info!("connecting to live database");
    let live_pool = db::connect_with_retry(&args.dsn).await?;
    info!("connecting to scratch database");
    let scratch_pool = db::connect_with_retry(scratch_dsn).await?;

    info!("inspecting live database");
    let source = catalog::inspect(&live_pool, &args.schemas).await?;
    info!("inspecting target schema");
    let target = catalog::inspect(&scratch_pool, &args.schemas).await?;

    live_pool.close().await;
    scratch_pool.close().await;

    plan::plan(&source, &target)
}
