// vidutils-cli/src/main.rs
//
// Entry point for the vidutils binary: initializes logging, parses
// the command line, verifies the external tools the chosen subcommand
// needs, and dispatches to the command implementations.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::io::Write;
use std::process;
use vidutils_core::check_dependency;

fn main() {
    // RUST_LOG controls verbosity; default to warnings only so the
    // command output (JSON report, playlist path) stays clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => check_tools(&["ffprobe", "ffmpeg"])
            .and_then(|()| commands::inspect::run(args)),
        Commands::Transform(args) => {
            check_tools(&["ffmpeg"]).and_then(|()| commands::transform::run(args))
        }
        Commands::Hlsify(args) => {
            check_tools(&["ffmpeg"]).and_then(|()| commands::hlsify::run(args))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn check_tools(tools: &[&str]) -> anyhow::Result<()> {
    for tool in tools {
        check_dependency(tool)?;
    }
    Ok(())
}
