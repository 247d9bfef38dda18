//! Extract command - process a single receipt transcript.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use tillscan_core::models::config::TillscanConfig;
use tillscan_core::{ReceiptExtraction, ReceiptKind, extract_receipt};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file (UTF-8 text)
    #[arg(required = true)]
    input: PathBuf,

    /// Receipt layout the transcript came from
    #[arg(short, long, value_enum)]
    kind: KindArg,

    /// Canonical branch name to verify against (may contain /-separated
    /// alternates)
    #[arg(short, long)]
    branch: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    /// Point-of-sale day report
    Pos,
    /// Home-delivery report
    Hd,
}

impl From<KindArg> for ReceiptKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pos => ReceiptKind::PointOfSale,
            KindArg::Hd => ReceiptKind::HomeDelivery,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    let text = fs::read_to_string(&args.input)?;
    debug!(chars = text.len(), "read transcript");

    let result = extract_receipt(args.kind.into(), &text, args.branch.as_deref(), &config);

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => render_text(&result),
    };

    match args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Load the pipeline configuration, defaulting when no file is given.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<TillscanConfig> {
    Ok(match config_path {
        Some(path) => TillscanConfig::from_file(std::path::Path::new(path))?,
        None => TillscanConfig::default(),
    })
}

pub(crate) fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn render_text(result: &ReceiptExtraction) -> String {
    let summary = &result.summary;
    let mut out = String::new();

    let _ = writeln!(out, "date:         {}", display_opt(&summary.receipt_date));
    let _ = writeln!(out, "gross sales:  {}", display_opt(&summary.gross_sales));
    let _ = writeln!(out, "net sales:    {}", display_opt(&summary.net_sales));
    let _ = writeln!(
        out,
        "guests:       {}",
        display_opt(&summary.guest_count_or_orders)
    );
    let _ = writeln!(out, "cash sales:   {}", display_opt(&summary.cash_sales));

    if !summary.categories.is_empty() {
        let _ = writeln!(out, "categories:");
        for row in &summary.categories {
            let _ = writeln!(
                out,
                "  {:<24} {:>5} {:>10} {:>6}%",
                row.name, row.quantity, row.sales_amount, row.contribution_percent
            );
        }
    }

    let branch = result
        .branch_candidate
        .as_ref()
        .map_or("-".to_string(), |c| c.raw_text.clone());
    let verdict = if result.branch_match {
        style("match").green()
    } else {
        style("MISMATCH").red()
    };
    let _ = writeln!(out, "branch:       {branch} ({verdict})");
    let _ = writeln!(out, "confidence:   {:.2}", result.confidence);

    for warning in &result.warnings {
        let _ = writeln!(out, "{} {warning}", style("⚠").yellow());
    }
    out
}
