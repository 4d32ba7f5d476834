use anyhow::Result;
use clap::Parser;
use imagetool::cli::{Cli, Commands};
use imagetool::commands;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Check => commands::check::run(&cli),
        Commands::Formats { json } => commands::formats::run(*json),
        Commands::Presets { json } => commands::presets::run(&cli, *json),
        Commands::Info { input } => commands::info::run(&cli, input),
        Commands::Convert {
            input,
            to,
            output,
            force,
        } => commands::convert::run(&cli, input, *to, output.clone(), *force),
        Commands::Icon {
            input,
            preset,
            sizes,
            output,
            force,
        } => commands::icon::run(
            &cli,
            input,
            preset.clone(),
            sizes.clone(),
            output.clone(),
            *force,
        ),
    }
}
