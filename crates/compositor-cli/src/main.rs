//! Compositor CLI entry point.
//!
//! Developer tools for the variable layer:
//! - `compositor vars` - List declared variables and enum tables
//! - `compositor call` - Invoke a text function
//! - `compositor replay` - Replay a scripted event scenario and resolve variables

mod commands;
mod logging;
mod output;

use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{run_call, run_replay, run_vars, CallArgs, ReplayArgs, VarsArgs};

/// Compositor variable layer tools.
#[derive(Debug, Parser)]
#[command(name = "compositor")]
#[command(about = "Inspect and exercise the compositor variable layer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List declared variables
    Vars(VarsArgs),
    /// Call a text function with literal arguments
    Call(CallArgs),
    /// Replay a scenario file and resolve variables along the way
    Replay(ReplayArgs),
}

fn setup_colors(color_when: ColorWhen) {
    match color_when {
        // owo-colors checks TTY, NO_COLOR, and FORCE_COLOR itself.
        ColorWhen::Auto => {}
        ColorWhen::Always => owo_colors::set_override(true),
        ColorWhen::Never => owo_colors::set_override(false),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    logging::init_logging(cli.verbose, cli.color != ColorWhen::Never);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Vars(args) => run_vars(args),
        Commands::Call(args) => run_call(args),
        Commands::Replay(args) => run_replay(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
