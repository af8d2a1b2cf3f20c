// Main entry point
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use polyglot::infrastructure::config;
use polyglot::infrastructure::logging::init_logging;
use polyglot::infrastructure::providers::available_identifiers;
use polyglot::interfaces::cli::Cli;
use polyglot::presentation::output::{format_languages, format_results};
use polyglot::presentation::theme::Theme;
use polyglot::state::AppState;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.list_providers {
        for id in available_identifiers() {
            println!("{}", id);
        }
        return Ok(());
    }
    if cli.list_languages {
        print!("{}", format_languages(&config.languages));
        return Ok(());
    }

    let input = match cli.batch_input() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(2);
        }
    };

    // Unknown providers are rejected here, before anything is sent
    let state = AppState::new(config)?;

    let spinner = (!cli.json).then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Translating...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let results = tokio::select! {
        results = state.orchestrator.translate_batch(
            &input.source,
            &input.text,
            input.targets.as_deref(),
        ) => results,
        _ = tokio::signal::ctrl_c() => {
            if let Some(pb) = &spinner {
                pb.finish_and_clear();
            }
            eprintln!("\nInterrupted, translation cancelled");
            std::process::exit(130);
        }
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let Some(path) = &cli.output {
        std::fs::write(path, serde_json::to_string_pretty(&results)?)?;
        eprintln!("Saved results to {}", path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let theme = Theme::from_name(&state.config.display.theme);
        print!(
            "{}",
            format_results(&input.text, &results, &theme, state.config.display.enable_emoji)
        );
    }

    if !results.is_empty() && results.iter().all(|r| !r.success) {
        std::process::exit(1);
    }

    Ok(())
}
