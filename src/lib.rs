//! Conversions between Julian Day numbers and the Julian, Gregorian and
//! Gonghe (共和) calendars, with the sexagenary cycle (干支) and weekdays.
//!
//! Every conversion goes through a JD. A JD counts days from noon, so civil
//! midnight falls on `.5`. Dates decompose into a [`CalendarDate`] carrying
//! the fraction of the day elapsed since midnight.
//!
//! ```
//! use zcal::{JulianDay, Weekday};
//!
//! let jd = JulianDay::from_western(1384, 12, 13);
//! assert_eq!(jd.get(), 2_226_910.5);
//! assert_eq!(jd.stem_branch().to_string(), "甲子");
//! assert_eq!(jd.weekday(), Weekday::Tuesday);
//! assert_eq!(jd.to_gregorian().to_string(), "1384-12-21");
//! ```
//!
//! The [`ephemeris`] and [`calibration`] modules search astronomical tables
//! for the 朔旦冬至 epochs the sexagenary day count is anchored to. The core
//! conversions never touch them.

mod consts;
mod prelude;
mod types;

pub mod calibration;
pub mod ephemeris;
pub mod gonghe;
pub mod sexagenary;
pub mod weekday;
pub mod western;

pub use calibration::{EpochCandidate, find_shuodan_dongzhi, find_shuodan_dongzhi_in_zone};
pub use consts::*;
pub use ephemeris::{Ephemeris, EphemerisError, TableEphemeris};
pub use gonghe::{gonghe_to_jd, jd_to_gonghe};
pub use sexagenary::{
    SexagenaryError, StemBranch, jd_to_ganzhi, jd_to_stem_branch, stem_branch,
    western_calendar_to_stem_branch, western_year_to_stem_branch,
};
pub use types::{Calendar, CalendarDate, JulianDay, is_gregorian_leap_year, is_julian_leap_year};
pub use weekday::{Weekday, jd_to_weekday};
pub use western::{
    WesternRules, gregorian_to_jd, jd_to_gregorian, jd_to_julian, jd_to_western, julian_to_jd,
    western_to_jd,
};
