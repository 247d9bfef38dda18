//! Verify command - test the branch matcher against a name pair.
//!
//! The typo and abbreviation dictionaries are tuned against real sample
//! receipts; this command is the quickest way to see what a new OCR failure
//! mode normalizes to and whether the cascade reconciles it.

use clap::Args;
use console::style;

use tillscan_core::{branch_matches, normalize_branch_name};

/// Arguments for the verify command.
#[derive(Args)]
pub struct VerifyArgs {
    /// Branch name as OCR read it
    candidate: String,

    /// Canonical directory name (may contain /-separated alternates)
    canonical: String,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    println!(
        "candidate:  {}",
        style(normalize_branch_name(&args.candidate)).cyan()
    );
    for alternate in args.canonical.split('/') {
        println!(
            "canonical:  {}",
            style(normalize_branch_name(alternate)).cyan()
        );
    }

    if branch_matches(&args.candidate, &args.canonical) {
        println!("{} names match", style("✓").green());
    } else {
        println!("{} names do not match", style("✗").red());
    }
    Ok(())
}
