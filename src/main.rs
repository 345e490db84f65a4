//! MouseBind - Mouse button binding preset tool
//!
//! Headless CLI for validating, inspecting, and resolving mouse button
//! binding presets against bundled mouse profiles and the action catalog.

use clap::{Parser, Subcommand};
use mousebind::cli::{
    ActionsArgs, CliError, ExportArgs, ImportArgs, PresetsArgs, ProfilesArgs, ResolveArgs,
    ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MouseBind - Mouse button binding preset tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a preset file against a mouse profile and the action catalog
    Validate(ValidateArgs),
    /// Resolve a button press to an action through a preset
    Resolve(ResolveArgs),
    /// List or search the action catalog
    Actions(ActionsArgs),
    /// List bundled mouse profiles
    Profiles(ProfilesArgs),
    /// List presets in the user preset directory
    Presets(PresetsArgs),
    /// Export a preset to a standalone file
    Export(ExportArgs),
    /// Import a preset file into the user preset directory
    Import(ImportArgs),
}

fn main() {
    // Initialize tracing; quiet by default, RUST_LOG overrides
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Actions(args) => args.execute(),
        Commands::Profiles(args) => args.execute(),
        Commands::Presets(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Import(args) => args.execute(),
    };

    if let Err(CliError { exit_code, message }) = result {
        if !message.is_empty() {
            eprintln!("Error: {message}");
        }
        std::process::exit(exit_code as i32);
    }
}
