//! Fix command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::config::load_config;
use crate::domain::{normalize_extensions, FixReport};
use crate::normalize::{fix_file, FixOptions, Normalizer};
use crate::scan::resolve_targets;
use crate::utils::display_path;

#[derive(Args)]
pub struct FixArgs {
    /// Markup files or build directories to rewrite (defaults to the configured target)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Config file (TOML or YAML)
    #[arg(short, long, value_name = "FILE", env = "PATHFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Markup extensions collected from directories (comma-separated)
    #[arg(short = 'e', long, value_name = "EXTS")]
    pub extensions: Option<String>,

    /// Report what would change without rewriting any file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: FixArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let mut cfg = load_config(&cwd, args.config.as_deref())?;
    if let Some(exts) = parse_csv(&args.extensions) {
        let exts = normalize_extensions(exts);
        if exts.is_empty() {
            anyhow::bail!("--extensions needs at least one extension, e.g. --extensions html,htm");
        }
        cfg.extensions = exts;
    }

    let targets = resolve_targets(&args.paths, &cfg)?;
    if targets.is_empty() {
        println!("✅ No markup files found, nothing to fix");
        return Ok(());
    }

    let normalizer = Normalizer::from_config(&cfg);
    let options = FixOptions { dry_run: args.dry_run };

    let mut reports = Vec::with_capacity(targets.len());
    for target in &targets {
        let shown = display_path(target, &cwd);
        println!("🔍 Checking {}", shown);
        let report = fix_file(target, &normalizer, options)?;
        tracing::debug!(
            "{}: {} cleanup passes, written: {}",
            shown,
            report.cleanup_passes,
            report.written
        );
        print_report(&report, &shown, args.dry_run);
        reports.push(report);
    }

    if reports.len() > 1 {
        print_summary(&reports);
    }

    Ok(())
}

fn print_report(report: &FixReport, shown: &str, dry_run: bool) {
    if report.is_noop() {
        println!("✅ No backslash paths found in {}, nothing to fix", shown);
        return;
    }

    println!("🔧 Found {} backslash path references", report.found);
    if dry_run {
        println!("📝 Dry run: {} left unchanged", shown);
    }
    if dry_run {
        println!("✨ Would fix {} path references", report.fixed());
    } else {
        println!("✨ Fixed {} path references", report.fixed());
    }
    if report.remaining > 0 {
        println!("⚠️  {} backslash references remain in {}", report.remaining, shown);
    }
    if report.hit_pass_cap {
        println!(
            "⚠️  Cleanup stopped at the pass limit; backslashes may remain in {} (raise max_cleanup_passes)",
            shown
        );
    }
    if report.is_complete() {
        println!("✅ All paths in {} now use forward slashes", shown);
    }
}

fn print_summary(reports: &[FixReport]) {
    let touched = reports.iter().filter(|r| !r.is_noop()).count();
    let fixed: usize = reports.iter().map(FixReport::fixed).sum();
    let remaining: usize = reports.iter().map(|r| r.remaining).sum();
    println!(
        "📊 {} files checked, {} needed fixes, {} references fixed, {} remaining",
        reports.len(),
        touched,
        fixed,
        remaining
    );
    let capped = reports.iter().filter(|r| r.hit_pass_cap).count();
    if capped > 0 {
        println!("⚠️  {} files stopped at the cleanup pass limit", capped);
    }
}
