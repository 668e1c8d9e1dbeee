mod cli;
mod logging;
mod report;

use std::fmt::Display;
use std::{fs, process};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use zcal::western::{WesternRules, civil_to_astronomical, western_calendar};
use zcal::{Calendar, JulianDay, TableEphemeris, calibration};

use crate::cli::{Cli, Command, EpochsArgs, System, ToJdArgs};
use crate::report::{DayReport, EpochReport, YearReport};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Jd(args) => emit(cli.json, &DayReport::new(JulianDay::new(args.jd))),
        Command::ToJd(args) => emit(cli.json, &DayReport::new(to_jd(args)?)),
        Command::Year(args) => emit(
            cli.json,
            &YearReport {
                year:        args.year,
                stem_branch: zcal::western_year_to_stem_branch(args.year),
            },
        ),
        Command::Epochs(args) => emit(cli.json, &epochs(args)?),
    }
}

fn emit<T: Serialize + Display>(json: bool, value: &T) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn to_jd(args: &ToJdArgs) -> Result<JulianDay> {
    let (calendar, year) = match args.calendar {
        System::Julian => (Calendar::Julian, args.year),
        System::Gregorian => (Calendar::Gregorian, args.year),
        System::Gonghe => (Calendar::Gonghe, args.year),
        System::Western => match western_calendar(args.year, args.month) {
            WesternRules::Julian => (Calendar::Julian, civil_to_astronomical(args.year)),
            WesternRules::Gregorian => (Calendar::Gregorian, args.year),
        },
    };

    let max_day = calendar.days_in_month(year, args.month as u8);
    if args.day > i32::from(max_day) {
        bail!(
            "{}-{:02} has {max_day} days in the {calendar} calendar, got day {}",
            args.year,
            args.month,
            args.day
        );
    }

    Ok(JulianDay::new(calendar.to_jd(year, args.month, args.day)))
}

fn epochs(args: &EpochsArgs) -> Result<EpochReport> {
    let text = fs::read_to_string(&args.table)
        .with_context(|| format!("reading {}", args.table.display()))?;
    let table: TableEphemeris = text
        .parse()
        .with_context(|| format!("parsing {}", args.table.display()))?;

    let Some(available) = table.years() else {
        bail!("{} has no entries", args.table.display());
    };
    let from = args.from.unwrap_or(*available.start());
    let to = args.to.unwrap_or(*available.end());
    if from > to {
        bail!("--from {from} is after --to {to}");
    }

    info!(from, to, tz = args.tz, zone = args.zone, "searching epochs");
    let found = if args.zone {
        calibration::find_shuodan_dongzhi_in_zone(&table, from..=to, args.tz)
    } else {
        calibration::find_shuodan_dongzhi(&table, from..=to, args.tz)
    }
    .context("searching epochs")?;

    Ok(EpochReport(found))
}
