//! Chrome to Safari Extension Converter CLI

use anyhow::Result;
use chrome2safari::validator::{current_host, ensure_supported_host};
use chrome2safari::{ConversionReport, Converter, ConverterConfig, Platform, XcrunGenerator};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chrome2safari")]
#[command(about = "Generate and patch Safari extension projects (macOS and iOS) from a Chrome extension", long_about = None)]
#[command(version)]
struct Cli {
    /// json5 configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chrome extension source directory (contains manifest.json)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Directory the macOS/ and iOS/ projects are generated into
    #[arg(long)]
    project_root: Option<PathBuf>,

    #[arg(long)]
    app_name: Option<String>,

    #[arg(long)]
    bundle_id: Option<String>,

    /// Only convert these platforms (macOS, iOS); repeatable
    #[arg(short, long = "platform")]
    platforms: Vec<Platform>,

    /// Do not stamp the manifest version into the Xcode projects
    #[arg(long)]
    no_version_bump: bool,

    /// Write a markdown conversion report to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Log every file touched
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<ConverterConfig> {
        let mut config = match &self.config {
            Some(path) => ConverterConfig::from_file(path)?,
            None => ConverterConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_dir = source.clone();
        }
        if let Some(root) = &self.project_root {
            config.project_root = root.clone();
        }
        if let Some(name) = &self.app_name {
            config.app_name = name.clone();
        }
        if let Some(bundle_id) = &self.bundle_id {
            config.bundle_identifier = bundle_id.clone();
        }
        if !self.platforms.is_empty() {
            config.platforms = self.platforms.clone();
        }
        if self.no_version_bump {
            config.bump_version = false;
        }

        config.check()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    println!("{}", "Chrome to Safari Extension Converter".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!();

    match run(&cli) {
        Ok(report) => print_summary(&cli, &report),
        Err(e) => {
            eprintln!("{}", "❌ Conversion failed!".red().bold());
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ConversionReport> {
    // Nothing may be touched on a host without Xcode
    ensure_supported_host(current_host())?;

    let config = cli.load_config()?;
    let converter = Converter::new(config, XcrunGenerator::default())?;
    let mut report = converter.empty_report();

    for &platform in &converter.config().platforms {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Converting {} project...", platform));

        let result = converter.convert_platform(platform);
        spinner.finish_and_clear();

        let platform_report = result?;
        println!("  {} {}", "✓".green(), format!("{} project ready", platform).bold());
        report.platforms.push(platform_report);
    }

    if let Some(path) = &cli.report {
        let markdown = chrome2safari::report::generate_report(&report)?;
        std::fs::write(path, markdown)?;
    }

    Ok(report)
}

fn print_summary(cli: &Cli, report: &ConversionReport) {
    println!();
    println!("{}", "✅ Conversion completed successfully!".green().bold());
    println!();
    println!("📊 Summary:");
    println!("  - Extension: {} v{}", report.extension_name, report.extension_version);
    for platform in &report.platforms {
        println!(
            "  - {}: {} change(s), {} skipped -> {}",
            platform.platform,
            platform.applied_count(),
            platform.skipped_count(),
            platform.project_dir.display()
        );
    }
    if let Some(path) = &cli.report {
        println!("  - Report: {}", path.display());
    }

    let warnings: Vec<_> = report.warnings().collect();
    if !warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Warnings:".yellow().bold());
        for (platform, warning) in warnings {
            println!("  - [{}] {}", platform, warning);
        }
    }
}
