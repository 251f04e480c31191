//! Framecode CLI - demonstration programs for the timecode library.

mod commands;

use clap::{Parser, Subcommand};

use commands::{CmdAdd, CmdIncrement, CmdInspect};

/// Command-line arguments for the framecode tool.
#[derive(Parser, Debug)]
#[command(name = "framecode")]
#[command(version)]
#[command(about = "Broadcast timecode inspection and arithmetic")]
#[command(long_about = "Framecode works with frame-accurate broadcast timecodes.\n\n\
    EXAMPLES:\n    \
    framecode inspect 01:30:45:12 --fps 25\n    \
    framecode inspect 00:01:00;02 --json\n    \
    framecode add 01:00:00:00 00:30:00:00 --fps 25\n    \
    framecode increment 00:00:59;29 --frames 1 --count 5")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a timecode and print its fields and format attributes
    Inspect(CmdInspect),
    /// Sum two same-format timecodes
    Add(CmdAdd),
    /// Print successive timecodes stepping a frame delta
    Increment(CmdIncrement),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Add(cmd) => cmd.run(),
        Commands::Increment(cmd) => cmd.run(),
    }
}
