use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cycle_calendar::cycle::{DEFAULT_MONTHS_RANGE, MAX_MONTHS_RANGE};
use cycle_calendar::settings::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH, MAX_LENGTH_DAYS};
use cycle_calendar::{Locale, Theme, from_iso};

/// Cycle Calendar - predict menstruation, fertile window and ovulation days
#[derive(Parser, Debug)]
#[command(name = "cycle-calendar", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "cycle-calendar.toml")]
    pub file: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable ANSI colours in the calendar grid
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save the last period date and average lengths, then recalculate
    Set(SetArgs),
    /// Print one or more month calendars with predictions
    Show(ShowArgs),
    /// Navigate the calendar interactively (n: next, p: previous, t: today, q: quit)
    Browse(HorizonArgs),
    /// List predicted events day by day
    Events(EventsArgs),
    /// Print the stored settings
    Settings,
    /// Remove the stored cycle settings
    Reset,
    /// Set the colour theme
    Theme {
        /// light or dark
        theme: Theme,
    },
    /// Set the display language
    Lang {
        /// en-US, pt-BR or es-ES
        lang: Locale,
    },
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Start of the last period (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub last_period: NaiveDate,

    /// Average cycle length in days
    #[arg(
        long,
        default_value_t = DEFAULT_CYCLE_LENGTH,
        value_parser = clap::value_parser!(i64).range(1..=MAX_LENGTH_DAYS)
    )]
    pub cycle_length: i64,

    /// Average period length in days
    #[arg(
        long,
        default_value_t = DEFAULT_PERIOD_LENGTH,
        value_parser = clap::value_parser!(i64).range(1..=MAX_LENGTH_DAYS)
    )]
    pub period_length: i64,
}

#[derive(clap::Args, Debug)]
pub struct HorizonArgs {
    /// Months to project on each side of today (30 days per month)
    #[arg(
        long,
        default_value_t = DEFAULT_MONTHS_RANGE,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_MONTHS_RANGE))
    )]
    pub horizon_months: u32,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Year of the first month shown (default: current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// First month shown, 1-12 (default: current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Number of consecutive months to print
    #[arg(short = 'n', long, default_value_t = 1)]
    pub months: usize,

    #[command(flatten)]
    pub horizon: HorizonArgs,
}

#[derive(clap::Args, Debug)]
pub struct EventsArgs {
    /// First day listed (default: today)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last day listed (default: end of the projection window)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    #[command(flatten)]
    pub horizon: HorizonArgs,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    from_iso(s).map_err(|e| e.to_string())
}
