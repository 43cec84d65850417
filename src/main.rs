//! Cycle Calendar - Main Entry Point
//!
//! Thin CLI over the `cycle_calendar` library: parses arguments, opens the
//! settings file and prints what the controller renders.

mod cli;
mod logging;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use cycle_calendar::cycle::add_days;
use cycle_calendar::{CycleCalendar, CycleSettings, MonthCursor};

use crate::cli::{Cli, Command, EventsArgs, ShowArgs};

fn main() {
    // No arguments at all: show help and exit with an error code
    if std::env::args().len() == 1 {
        let mut cmd = Cli::command();
        cmd.print_help().ok();
        println!();
        process::exit(2);
    }

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();
    let color = !cli.no_color;
    let mut calendar = CycleCalendar::open(&cli.file, today)
        .with_context(|| format!("Failed to open {}", cli.file.display()))?;

    match cli.command {
        Command::Set(args) => {
            calendar.save_settings(CycleSettings::new(
                args.last_period,
                args.cycle_length,
                args.period_length,
            ))?;
            println!("{}", calendar.summary());
            println!("{}", calendar.footer_note());
        }
        Command::Show(args) => show(calendar, args, color)?,
        Command::Browse(args) => {
            browse(calendar.with_horizon_months(args.horizon_months), color)?;
        }
        Command::Events(args) => events(calendar, args),
        Command::Settings => print!("{}", calendar.settings_block()),
        Command::Reset => {
            calendar.reset()?;
            println!("{}", calendar.summary());
        }
        Command::Theme { theme } => {
            calendar.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        Command::Lang { lang } => {
            calendar.set_language(lang)?;
            println!("Language set to {}", lang);
        }
    }

    Ok(())
}

fn show(calendar: CycleCalendar, args: ShowArgs, color: bool) -> Result<()> {
    let mut calendar = calendar.with_horizon_months(args.horizon.horizon_months);
    let current = calendar.cursor();
    let year = args.year.unwrap_or(current.year());
    let month = args.month.unwrap_or(current.month());
    let Some(cursor) = MonthCursor::new(year, month) else {
        bail!("Invalid month {}-{}: month must be between 1 and 12", year, month);
    };
    calendar.go_to(cursor);

    println!("{}\n", calendar.banner());
    println!("{}", calendar.render_months(args.months.max(1), color));
    println!("{}\n", calendar.legend(color));
    println!("{}", calendar.summary());
    let footer = calendar.footer_note();
    if !footer.is_empty() {
        println!("{}", footer);
    }
    Ok(())
}

fn browse(mut calendar: CycleCalendar, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("{}", calendar.render_month(color));
        println!("{}", calendar.legend(color));
        print!("[n]ext [p]revious [t]oday [q]uit > ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "n" | "next" => calendar.next_month(),
            "p" | "prev" | "previous" => calendar.previous_month(),
            "t" | "today" => calendar.go_to_today(),
            "q" | "quit" => break,
            "" => {}
            other => eprintln!("Unknown command '{}'", other),
        }
        println!();
    }
    Ok(())
}

fn events(calendar: CycleCalendar, args: EventsArgs) {
    let calendar = calendar.with_horizon_months(args.horizon.horizon_months);
    let today: NaiveDate = calendar.today();
    let from = args.from.unwrap_or(today);
    let to = args
        .to
        .unwrap_or_else(|| add_days(today, i64::from(calendar.horizon_days())));
    println!("{}", calendar.events(from, to));
}
