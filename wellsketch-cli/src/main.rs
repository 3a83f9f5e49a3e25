use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use error::{print_error_and_exit, CliError};

#[derive(Parser)]
#[command(name = "wellsketch")]
#[command(about = "Wellsketch - wellbore construction schematics")]
#[command(version)]
#[command(long_about = "
Wellsketch draws the open hole, cement sheath and casing string of the deepest
element of a well on a depth-proportional schematic.

Examples:
  wellsketch sample --output well.toml
  wellsketch render --well well.toml --output well.svg
  wellsketch render --well well.toml --output well.png --width 600 --height 1200
  wellsketch inspect --well well.toml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a well file to SVG or PNG
    Render {
        /// Well file (TOML, or JSON with a .json extension)
        #[arg(long, required = true)]
        well: PathBuf,

        /// Output file (SVG/PNG)
        #[arg(short, long, required = true)]
        output: PathBuf,

        /// Output format (auto-detected from extension)
        #[arg(long)]
        format: Option<RenderFormat>,

        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Title drawn above the schematic
        #[arg(long)]
        title: Option<String>,

        /// Leave out the version and timestamp footer
        #[arg(long)]
        no_footer: bool,
    },

    /// Print or write an example well file
    Sample {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open hole example instead of a cased and cemented one
        #[arg(long)]
        open_hole: bool,
    },

    /// Print the derived ranges and shape points as JSON
    Inspect {
        /// Well file (TOML, or JSON with a .json extension)
        #[arg(long, required = true)]
        well: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    Svg,
    Png,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            well,
            output,
            format,
            width,
            height,
            title,
            no_footer,
        } => commands::render::execute(well, output, format, width, height, title, no_footer),

        Commands::Sample { output, open_hole } => commands::sample::execute(output, open_hole),

        Commands::Inspect { well } => commands::inspect::execute(well),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            print_error_and_exit(cli_err);
        }
        return Err(err);
    }

    Ok(())
}
