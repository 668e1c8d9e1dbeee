use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Calendar conversions and sexagenary labels.
#[derive(Parser)]
#[command(
    name = "zcal",
    version,
    about = "Julian, Gregorian and Gonghe calendar conversions with sexagenary labels"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show a Julian Day in every calendar.
    Jd(JdArgs),
    /// Convert a calendar date to a Julian Day.
    ToJd(ToJdArgs),
    /// Show the stem-branch of a Western civil year.
    Year(YearArgs),
    /// Search an ephemeris table for 朔旦冬至 epochs.
    Epochs(EpochsArgs),
}

/// Calendars accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum System {
    /// Proleptic Julian, astronomical years
    Julian,
    /// Proleptic Gregorian, astronomical years
    Gregorian,
    /// Gonghe calendar
    Gonghe,
    /// Julian before 1582-10, Gregorian after, civil years
    Western,
}

/// Arguments for the `jd` subcommand.
#[derive(clap::Args)]
pub struct JdArgs {
    /// Julian Day, e.g. 2451545.0
    #[arg(allow_negative_numbers = true)]
    pub jd: f64,
}

/// Arguments for the `to-jd` subcommand.
#[derive(clap::Args)]
pub struct ToJdArgs {
    /// Calendar the date is written in.
    #[arg(value_enum)]
    pub calendar: System,

    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    #[arg(value_parser = clap::value_parser!(i32).range(1..=12))]
    pub month: i32,

    #[arg(value_parser = clap::value_parser!(i32).range(1..=31))]
    pub day: i32,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Civil year; there is no year 0, -1 is 1 BC.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `epochs` subcommand.
#[derive(clap::Args)]
pub struct EpochsArgs {
    /// Ephemeris table: `year solstice_jd [new_moon_jd ...]` per line.
    #[arg(short, long)]
    pub table: PathBuf,

    /// First year to search. Defaults to the first year in the table.
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Last year to search. Defaults to the last year in the table.
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Time zone offset from UTC, in hours.
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    pub tz: f64,

    /// Require the coincidence in UTC as well as in the zone.
    #[arg(long)]
    pub zone: bool,
}
