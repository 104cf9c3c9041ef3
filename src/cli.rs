use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jalali calendar tool.
#[derive(Parser)]
#[command(
    name = "jalali",
    version,
    about = "Convert, format and print Jalali (Solar Hijri) dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file with option defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current date and time in the Jalali calendar.
    Now(NowArgs),
    /// Convert a Gregorian `year/month/day` to Jalali.
    G2j(ConvertArgs),
    /// Convert a Jalali `year/month/day` to Gregorian.
    J2g(ConvertArgs),
    /// Print a month of the current Jalali year as a grid.
    Calendar(CalendarArgs),
    /// List the named days of a Jalali month.
    Events(EventsArgs),
}

/// Arguments for the `now` subcommand.
#[derive(clap::Args)]
pub struct NowArgs {
    /// `default` or a pattern of `%` directives, e.g. `"%A %-d %B %Y"`.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output language: farsi or fingilish.
    #[arg(short, long)]
    pub lang: Option<String>,
}

/// Arguments for the `g2j` and `j2g` subcommands.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as `year/month/day`.
    pub date: String,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Month name (farvardin..esfand), number (1-12), or `now`/0.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Output language: farsi or fingilish.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Grid color: def, black, red, blue, cyan, green, yellow, pink or gray.
    #[arg(long)]
    pub color: Option<String>,

    /// Marker of today's cell: highlight, underline or blink.
    #[arg(short, long)]
    pub style: Option<String>,
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Month name (farvardin..esfand), number (1-12), or `now`/0.
    #[arg(short, long)]
    pub month: Option<String>,

    /// Print `<month> <day>: <event>` lines instead of `day<TAB>event`.
    #[arg(short, long)]
    pub inplace: bool,
}
