//! gradebook CLI — interactive student roster and grade manager.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use gradebook_core::roster::Roster;

mod commands;
mod config;
mod menu;
mod prompt;
mod seed;

use prompt::Prompt;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Interactive student roster and grade manager"
)]
struct Cli {
    /// Config file path (defaults to ./gradebook.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preload a small demo roster
    #[arg(long)]
    seed_demo: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;

    let mut roster = if cli.seed_demo {
        let roster = seed::demo_roster()?;
        tracing::info!(students = roster.len(), "demo roster preloaded");
        roster
    } else {
        Roster::new()
    };

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());
    menu::run(&mut roster, &config, &mut prompt)
}
