use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use log::{debug, LevelFilter};

mod console;
mod driver;
mod error;
mod output;
mod types;

use driver::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Animals - an Animal and a Dog talking through the same handle
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which demo routine to run
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Color names and sounds in text output
    #[arg(long)]
    color: bool,

    /// More logging on stderr (-v info, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.color {
        colored::control::set_override(true);
    }
    debug!("variant {:?}, format {:?}", cli.variant, cli.format);

    match cli.format {
        Format::Json => output::output_json(cli.variant)?,
        Format::Text => output::output_text(cli.variant, cli.color)?,
    }

    Ok(())
}
