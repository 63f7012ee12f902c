mod analyzer;
mod cli;
mod config;
mod error;
mod narrative;
mod report;
mod scoring;
mod types;

use crate::error::CodegradeError;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_GATE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("codegrade={level}"))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn require_file(path: &Path) -> Result<(), CodegradeError> {
    if !path.exists() {
        return Err(CodegradeError::PathNotFound(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(CodegradeError::NotAFile(path.display().to_string()));
    }
    Ok(())
}

fn run() -> Result<i32, CodegradeError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            require_file(&cmd.path)?;

            let mut cfg = config::load_config(&cmd.path)?;
            if let Some(prompt) = &cmd.prompt {
                let narrative = cfg.narrative.get_or_insert_with(Default::default);
                narrative.prompt_template = Some(prompt.display().to_string());
            }

            // The review must exist before anything is printed: with no
            // review text there is no defined final score.
            let review_text = narrative::review(&cmd.path, &cfg.narrative())?;
            let heuristic = scoring::extract::extract_score(&review_text);

            let diagnostic_report = analyzer::collect(&cmd.path, &cfg.analyzer());
            let deterministic = scoring::penalty::penalty_score(diagnostic_report.as_ref());

            let final_score = scoring::combine(deterministic, heuristic);
            let score_report = types::report::ScoreReport::new(
                cmd.path.display().to_string(),
                deterministic,
                heuristic,
                final_score,
                diagnostic_report.as_ref().map(|report| report.len()),
            );

            let format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&score_report, format)?);

            let gate = cmd.fail_under.or(cfg.fail_under());
            match gate {
                Some(threshold) if final_score < threshold => {
                    eprintln!("gate: final score {final_score:.1} is below {threshold:.1}");
                    Ok(exit_code::BELOW_GATE)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Static(cmd) => {
            if !cmd.path.exists() {
                return Err(CodegradeError::PathNotFound(cmd.path.display().to_string()));
            }

            let cfg = config::load_config(&cmd.path)?;
            let diagnostic_report = analyzer::collect(&cmd.path, &cfg.analyzer());
            if diagnostic_report.is_none() {
                tracing::warn!("no analyzer report; scoring as a clean run");
            }
            let score = scoring::penalty::penalty_score(diagnostic_report.as_ref());
            println!("{score}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Narrative(cmd) => {
            require_file(&cmd.path)?;

            let mut cfg = config::load_config(&cmd.path)?;
            if let Some(prompt) = &cmd.prompt {
                let narrative = cfg.narrative.get_or_insert_with(Default::default);
                narrative.prompt_template = Some(prompt.display().to_string());
            }

            let review_text = narrative::review(&cmd.path, &cfg.narrative())?;
            if cmd.show_review {
                println!("{review_text}");
                println!("---");
            }
            let score = scoring::extract::extract_score(&review_text);
            println!("{score}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
