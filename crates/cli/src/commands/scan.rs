//! Heuristic scanning command.
//!
//! Thin orchestration over [`solsift_analyzer::RuleEngine`]: read source,
//! scan, render. The engine itself cannot fail, so every error surfaced here
//! is an I/O or argument problem, never an analysis one. Directory scans
//! walk the tree for `.sol` files and keep going past unreadable entries
//! rather than aborting the whole run.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Subcommand, ValueEnum};
use colored::*;
use solsift_analyzer::{AnalysisReport, RuleEngine, Severity};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Subcommand, Clone)]
pub enum ScanCommand {
    Run {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        #[arg(long, value_enum, default_value_t = SeverityFilter::Low)]
        min_severity: SeverityFilter,

        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum SeverityFilter {
    Low,
    Medium,
    High,
}

impl SeverityFilter {
    pub fn threshold(&self) -> Severity {
        match self {
            SeverityFilter::Low => Severity::Low,
            SeverityFilter::Medium => Severity::Medium,
            SeverityFilter::High => Severity::High,
        }
    }
}

impl ScanCommand {
    pub fn execute(&self) -> Result<()> {
        match self {
            ScanCommand::Run {
                input,
                format,
                min_severity,
                verbose,
            } => {
                if input.is_file() {
                    scan_single_file(input, *format, *min_severity, *verbose)
                } else if input.is_dir() {
                    scan_directory(input, *format, *min_severity, *verbose)
                } else {
                    anyhow::bail!("Input path does not exist: {}", input.display())
                }
            }
        }
    }
}

fn scan_single_file(
    path: &PathBuf,
    format: OutputFormat,
    min_severity: SeverityFilter,
    verbose: bool,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    if verbose {
        println!("🔍 Scanning {}", path.display());
    }

    let engine = RuleEngine::new();
    let mut report = engine.analyze(&content);
    apply_severity_filter(&mut report, min_severity);

    output_report(&report, format, verbose, Some(path))
}

fn scan_directory(
    dir: &PathBuf,
    format: OutputFormat,
    min_severity: SeverityFilter,
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!("🔍 Scanning directory: {}", dir.display());
    }

    let solidity_files = find_solidity_files(dir)?;

    if solidity_files.is_empty() {
        println!("⚠️  No Solidity files found in {}", dir.display());
        return Ok(());
    }

    if verbose {
        println!("📁 Found {} Solidity files", solidity_files.len());
    }

    let engine = RuleEngine::new();
    let mut all_reports = BTreeMap::new();

    for file_path in solidity_files {
        let content = match fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", file_path.display(), e);
                continue;
            }
        };

        let mut report = engine.analyze(&content);
        apply_severity_filter(&mut report, min_severity);

        if !report.is_empty() {
            all_reports.insert(file_path, report);
        }
    }

    output_directory_report(&all_reports, format, verbose)
}

/// Only the security list carries a severity; the other categories are
/// advisory and pass through unfiltered.
fn apply_severity_filter(report: &mut AnalysisReport, min_severity: SeverityFilter) {
    let threshold = min_severity.threshold();
    report.security.retain(|f| f.severity >= threshold);
}

fn find_solidity_files(dir: &PathBuf) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "sol") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn output_report(
    report: &AnalysisReport,
    format: OutputFormat,
    verbose: bool,
    file_path: Option<&PathBuf>,
) -> Result<()> {
    match format {
        OutputFormat::Console => {
            if let Some(path) = file_path {
                println!("\n📄 Scan results for: {}", path.display());
            }

            if report.is_empty() {
                println!("✅ No issues found");
                return Ok(());
            }

            println!(
                "⚠️  Found {} potential issues:",
                report.total_findings()
            );

            if !report.security.is_empty() {
                println!("\n{}", "Security".bright_red().bold());
                for (i, finding) in report.security.iter().enumerate() {
                    println!(
                        "  {}. {} {} {} (line {})",
                        i + 1,
                        finding.severity.emoji(),
                        finding.severity,
                        finding.kind.bold(),
                        finding.line
                    );
                    if verbose {
                        println!("     {}", finding.description.dimmed());
                        println!("     ↳ {}", finding.recommendation);
                    }
                }
            }

            if !report.optimization.is_empty() {
                println!("\n{}", "Optimization".bright_yellow().bold());
                for (i, finding) in report.optimization.iter().enumerate() {
                    println!("  {}. {} (line {})", i + 1, finding.kind.bold(), finding.line);
                    if verbose {
                        println!("     {}", finding.description.dimmed());
                        println!("     ↳ {}", finding.suggestion);
                    }
                }
            }

            if !report.gas_efficiency.is_empty() {
                println!("\n{}", "Gas Efficiency".bright_green().bold());
                for (i, finding) in report.gas_efficiency.iter().enumerate() {
                    println!(
                        "  {}. {} (line {}, saving: {})",
                        i + 1,
                        finding.kind.bold(),
                        finding.line,
                        finding.potential_saving
                    );
                    if verbose {
                        println!("     {}", finding.description.dimmed());
                        println!("     ↳ {}", finding.recommendation);
                    }
                }
            }

            if !report.code_quality.is_empty() {
                println!("\n{}", "Code Quality".bright_blue().bold());
                for (i, finding) in report.code_quality.iter().enumerate() {
                    println!("  {}. {} (line {})", i + 1, finding.kind.bold(), finding.line);
                    if verbose {
                        println!("     {}", finding.description.dimmed());
                        println!("     ↳ {}", finding.recommendation);
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", report.to_json()?);
        }
        OutputFormat::Markdown => {
            println!("{}", report.to_markdown());
        }
    }
    Ok(())
}

fn output_directory_report(
    all_reports: &BTreeMap<PathBuf, AnalysisReport>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Console => {
            if all_reports.is_empty() {
                println!("✅ No issues found in any files");
                return Ok(());
            }

            println!("\n📊 Directory Scan Summary:");
            println!("   Files with findings: {}", all_reports.len());

            let total_findings: usize = all_reports.values().map(|r| r.total_findings()).sum();
            println!("   Total findings: {}", total_findings);

            for (file_path, report) in all_reports {
                output_report(report, OutputFormat::Console, verbose, Some(file_path))?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(all_reports)?;
            println!("{}", json);
        }
        OutputFormat::Markdown => {
            println!("# Directory Scan Report\n");
            if all_reports.is_empty() {
                println!("No issues found in any files");
            } else {
                let total_findings: usize = all_reports.values().map(|r| r.total_findings()).sum();
                println!("## Summary\n");
                println!("- Files with findings: {}", all_reports.len());
                println!("- Total findings: {}\n", total_findings);

                for (file_path, report) in all_reports {
                    println!("## File: `{}`\n", file_path.display());
                    println!("{}", report.to_markdown());
                }
            }
        }
    }
    Ok(())
}
