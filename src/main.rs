mod cli;
mod config;
mod core;
mod record;
mod source;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, ClassifyArgs, Commands, RunArgs, SampleArgs};
use core::classify::{PerformanceTier, StyleTier};
use core::feedback;
use record::{AssessmentRecord, SkillCategory};
use source::FileSource;
use std::path::PathBuf;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => run_report(args, ReportMode::Full),
        Commands::Chart(args) => run_report(args, ReportMode::ChartOnly),
        Commands::Classify(args) => run_classify(args),
        Commands::Sample(args) => write_sample(args),
        Commands::Init(args) => {
            let path = match args.config {
                Some(path) => path,
                None => std::env::current_dir()?.join("bandscore.toml"),
            };
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

enum ReportMode {
    Full,
    ChartOnly,
}

fn run_report(args: RunArgs, mode: ReportMode) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;

    let record_path = args
        .file
        .unwrap_or_else(|| PathBuf::from(&loaded.config.general.record_file));
    let source = FileSource::new(record_path);
    let view = core::build_report(&source, &loaded.config)?;

    let output_json = args.json || loaded.config.general.json;
    match mode {
        ReportMode::Full => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                core::render::print_human(&view, &loaded.config.display);
            }
        }
        ReportMode::ChartOnly => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&view.chart_series)?);
            } else {
                core::render::print_chart(&view, &loaded.config.display);
            }
        }
    }

    Ok(0)
}

fn run_classify(args: ClassifyArgs) -> Result<i32> {
    let tier = PerformanceTier::from_score(args.score);
    let style = StyleTier::from_score(args.score);
    println!(
        "band {:.1}: {} (color tier {})",
        args.score,
        tier.as_str(),
        style.as_str()
    );

    if let Some(name) = args.category {
        let category: SkillCategory = name.parse()?;
        println!("{}: {}", category, feedback::feedback_for(category, args.score));
    }

    Ok(0)
}

fn write_sample(args: SampleArgs) -> Result<i32> {
    if args.out.exists() {
        bail!(
            "refusing to overwrite existing record file: {}",
            args.out.display()
        );
    }

    let json = serde_json::to_string_pretty(&AssessmentRecord::sample())?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("failed writing {}", args.out.display()))?;
    println!("created {}", args.out.display());
    Ok(0)
}
