mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use jalali_date::config::{CalendarOptions, Config, EventsOptions, NowOptions};
use jalali_date::{GregorianDate, JalaliDate, events, grid};

use crate::cli::{CalendarArgs, Cli, Command, EventsArgs, NowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Now(args) => {
            let options = now_options(config.now, args)?;
            println!("{}", jalali_date::now(&options.format, options.language)?);
        }
        Command::G2j(args) => {
            let date: GregorianDate = args.date.parse().context("Invalid Gregorian date")?;
            println!("{}", date.to_jalali()?);
        }
        Command::J2g(args) => {
            let date: JalaliDate = args.date.parse().context("Invalid Jalali date")?;
            println!("{}", date.to_gregorian()?);
        }
        Command::Calendar(args) => {
            let options = calendar_options(config.calendar, args)?;
            grid::print_calendar(&options)?;
        }
        Command::Events(args) => {
            let options = events_options(config.events, args)?;
            if options.inplace {
                events::print_events(options.month)?;
            } else {
                let today = chrono::Local::now().date_naive();
                for (day, event) in events::events(options.month, today)? {
                    println!("{day}\t{event}");
                }
            }
        }
    }
    Ok(())
}

fn now_options(mut options: NowOptions, args: NowArgs) -> Result<NowOptions> {
    if let Some(format) = args.format {
        options.format = format;
    }
    if let Some(lang) = args.lang {
        options.language = lang.parse()?;
    }
    tracing::info!(format = %options.format, language = %options.language, "now");
    Ok(options)
}

fn calendar_options(mut options: CalendarOptions, args: CalendarArgs) -> Result<CalendarOptions> {
    if let Some(month) = args.month {
        options.month = month.parse()?;
    }
    if let Some(lang) = args.lang {
        options.language = lang.parse()?;
    }
    if let Some(color) = args.color {
        options.color = color.parse()?;
    }
    if let Some(style) = args.style {
        options.style = style.parse()?;
    }
    tracing::info!(?options, "calendar");
    Ok(options)
}

fn events_options(mut options: EventsOptions, args: EventsArgs) -> Result<EventsOptions> {
    if let Some(month) = args.month {
        options.month = month.parse()?;
    }
    options.inplace |= args.inplace;
    tracing::info!(?options, "events");
    Ok(options)
}
