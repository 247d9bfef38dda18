//! Batch command - process many transcript files in one run.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use tillscan_core::ReceiptExtraction;
use tillscan_core::extract_receipt;

use super::extract::{KindArg, display_opt, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Receipt layout for every file in the batch
    #[arg(short, long, value_enum)]
    kind: KindArg,

    /// Canonical branch name to verify each transcript against
    #[arg(short, long)]
    branch: Option<String>,

    /// Output directory for per-file JSON
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "ocr")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} transcripts to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results: Vec<(PathBuf, ReceiptExtraction)> = Vec::with_capacity(files.len());
    let mut failures = 0usize;

    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let result =
                    extract_receipt(args.kind.into(), &text, args.branch.as_deref(), &config);
                if let Some(ref output_dir) = args.output_dir {
                    let stem = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "receipt".to_string());
                    let out_path = output_dir.join(stem).with_extension("json");
                    fs::write(&out_path, serde_json::to_string_pretty(&result)?)?;
                }
                results.push((path, result));
            }
            Err(e) => {
                failures += 1;
                if args.continue_on_error {
                    warn!("skipping {}: {}", path.display(), e);
                } else {
                    pb.finish_and_clear();
                    return Err(e.into());
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if args.summary {
        write_summary_csv(&results, args.output_dir.as_deref())?;
    }

    println!(
        "{} Processed {} transcripts in {:.1}s ({} failed)",
        style("✓").green(),
        results.len(),
        start.elapsed().as_secs_f64(),
        failures
    );
    Ok(())
}

fn write_summary_csv(
    results: &[(PathBuf, ReceiptExtraction)],
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let path = output_dir.unwrap_or(Path::new(".")).join("summary.csv");
    let mut writer = csv::Writer::from_path(&path)?;

    writer.write_record([
        "file",
        "receipt_date",
        "gross_sales",
        "net_sales",
        "guest_count",
        "cash_sales",
        "categories",
        "branch_candidate",
        "branch_match",
        "confidence",
    ])?;

    for (file, result) in results {
        let summary = &result.summary;
        writer.write_record([
            file.display().to_string(),
            display_opt(&summary.receipt_date),
            display_opt(&summary.gross_sales),
            display_opt(&summary.net_sales),
            display_opt(&summary.guest_count_or_orders),
            display_opt(&summary.cash_sales),
            summary.categories.len().to_string(),
            result
                .branch_candidate
                .as_ref()
                .map_or("-".to_string(), |c| c.raw_text.clone()),
            result.branch_match.to_string(),
            format!("{:.2}", result.confidence),
        ])?;
    }

    writer.flush()?;
    println!(
        "{} Summary written to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}
