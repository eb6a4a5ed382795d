use anyhow::Context;
use clap::Parser;
use reviewlens::cli::commands::Commands;
use reviewlens::cli::handlers;
use reviewlens::config::AppConfig;

#[derive(Parser)]
#[command(name = "reviewlens")]
#[command(about = "reviewlens CLI for review classification, sentiment and diagnostics")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a config file (default: config.toml, then config.example.toml)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => AppConfig::load().unwrap_or_else(|_| {
            println!("No config file found, using built-in defaults");
            AppConfig::default()
        }),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }

    reviewlens::logging::init_logging_with_config(Some(&config))
        .context("failed to initialize logging")?;

    match cli.command {
        Commands::Analyze {
            input,
            profile,
            snapshot,
            report,
        } => handlers::handle_analyze_command(&config, &input, profile, snapshot, report)
            .with_context(|| format!("analysis of {input} failed"))?,
        Commands::Profiles => handlers::handle_profiles_command()?,
        Commands::Features { profile } => handlers::handle_features_command(&config, profile)?,
        Commands::Config => handlers::handle_config_command(&config)?,
    }

    Ok(())
}
