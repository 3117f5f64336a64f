use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use dialkeep_batch::{run_batch, NormalizeOptions};
use dialkeep_core::domain::{canonicalize_for_region, DOMESTIC_REGION};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Phone value to canonicalize
    pub value: String,
    /// Region hint; only US formatting is implemented
    #[arg(long, default_value = DOMESTIC_REGION)]
    pub region: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    input: String,
    canonical: String,
    changed: bool,
}

pub fn run(ctx: &Context<'_>, args: RunArgs) -> Result<()> {
    let options = NormalizeOptions {
        dry_run: args.dry_run,
    };
    let stats = run_batch(ctx.store, &options)?;

    if ctx.json {
        print_json(&stats)?;
    } else {
        let suffix = if args.dry_run { " (dry run)" } else { "" };
        println!(
            "processed {} contacts: {} changed, {} skipped, {} failed{}",
            stats.processed, stats.changed, stats.skipped, stats.failed, suffix
        );
    }
    Ok(())
}

pub fn check(json: bool, args: CheckArgs) -> Result<()> {
    let canonical = canonicalize_for_region(&args.value, &args.region);

    if json {
        print_json(&CheckReport {
            changed: canonical != args.value,
            input: args.value,
            canonical,
        })?;
    } else {
        println!("{canonical}");
    }
    Ok(())
}
