mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{add, init, inspect, render, AddArgs, InitArgs, InspectArgs, RenderArgs};

/// Pageforge CLI - render and edit composed store pages
#[derive(Parser, Debug)]
#[command(name = "pageforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pageforge project
    Init(InitArgs),

    /// Render a stored page to HTML
    Render(RenderArgs),

    /// Show how each section of a page resolves to a template
    Inspect(InspectArgs),

    /// Insert a palette block into a stored page
    Add(AddArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match std::env::current_dir() {
        Ok(cwd) => match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Render(args) => render(args, &cwd).await,
            Command::Inspect(args) => inspect(args, &cwd).await,
            Command::Add(args) => add(args, &cwd).await,
        },
        Err(err) => Err(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
