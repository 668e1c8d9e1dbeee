//! Proleptic Julian and Gregorian calendars, and the civil "Western" calendar
//! that switches from one to the other in October 1582.
//!
//! Every division below is a floor division: the formulas must keep working
//! for years before -4800 and for negative JDs.

use serde::{Deserialize, Serialize};

use crate::consts::{CUTOVER_MONTH, CUTOVER_YEAR, GREGORIAN_CUTOVER_JD};
use crate::prelude::*;
use crate::types::{Calendar, CalendarDate, saturate_year, split_jd};

/// The rule set a civil Western date is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WesternRules {
    #[display(fmt = "julian")]
    Julian,
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl From<WesternRules> for Calendar {
    fn from(rules: WesternRules) -> Self {
        match rules {
            WesternRules::Julian => Self::Julian,
            WesternRules::Gregorian => Self::Gregorian,
        }
    }
}

/// Converts a proleptic Gregorian date (astronomical year) to the JD of its
/// starting midnight.
///
/// # Example
///
/// ```
/// use zcal::western::gregorian_to_jd;
///
/// assert_eq!(2_451_827.5, gregorian_to_jd(2000, 10, 10));
/// ```
pub fn gregorian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let (y, m) = march_based(year, month);
    let jdn = i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    jdn as f64 - 0.5
}

/// Converts a JD to a proleptic Gregorian date (astronomical year).
///
/// JDs beyond [`JD_LIMIT`](crate::JD_LIMIT) read as the limit.
pub fn jd_to_gregorian(jd: f64) -> CalendarDate {
    let (jdn, time_of_day) = split_jd(jd);
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    decompose(f, time_of_day)
}

/// Converts a proleptic Julian date (astronomical year) to the JD of its
/// starting midnight.
///
/// # Example
///
/// ```
/// use zcal::western::julian_to_jd;
///
/// assert_eq!(2_226_910.5, julian_to_jd(1384, 12, 13));
/// ```
pub fn julian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let (y, m) = march_based(year, month);
    let jdn = i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083;
    jdn as f64 - 0.5
}

/// Converts a JD to a proleptic Julian date (astronomical year).
pub fn jd_to_julian(jd: f64) -> CalendarDate {
    let (jdn, time_of_day) = split_jd(jd);
    decompose(jdn + 1401, time_of_day)
}

/// Picks the rules used to read a civil Western date: Gregorian from
/// October 1582 on, Julian before.
///
/// Only year and month take part, so 1582-10-01 to 1582-10-14 are read as
/// Gregorian dates.
pub const fn western_calendar(year: i32, month: i32) -> WesternRules {
    if year > CUTOVER_YEAR || (year == CUTOVER_YEAR && month >= CUTOVER_MONTH) {
        WesternRules::Gregorian
    } else {
        WesternRules::Julian
    }
}

/// Converts a civil Western date to a JD.
///
/// `year` uses civil numbering: `-1` is 1 BC and directly precedes `1`.
///
/// # Example
///
/// ```
/// use zcal::western::western_to_jd;
///
/// // 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian)
/// assert_eq!(western_to_jd(1582, 9, 30) + 5.0, western_to_jd(1582, 10, 15));
/// ```
pub fn western_to_jd(year: i32, month: i32, day: i32) -> f64 {
    match western_calendar(year, month) {
        WesternRules::Gregorian => gregorian_to_jd(year, month, day),
        WesternRules::Julian => julian_to_jd(civil_to_astronomical(year), month, day),
    }
}

/// Converts a JD to a civil Western date: Gregorian from
/// [`GREGORIAN_CUTOVER_JD`] on, Julian before, with no year zero.
pub fn jd_to_western(jd: f64) -> CalendarDate {
    if jd >= GREGORIAN_CUTOVER_JD {
        jd_to_gregorian(jd)
    } else {
        let date = jd_to_julian(jd);
        CalendarDate {
            year: astronomical_to_civil(date.year),
            ..date
        }
    }
}

/// Maps a civil year (no year zero) to an astronomical one: 1 BC is year 0.
pub const fn civil_to_astronomical(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// Maps an astronomical year to a civil one: year 0 is 1 BC (`-1`).
pub const fn astronomical_to_civil(year: i32) -> i32 {
    if year <= 0 { year.saturating_sub(1) } else { year }
}

/// Re-bases `(year, month)` on a year that starts in March of year -4800, so
/// that the leap day falls at the end of the year.
fn march_based(year: i32, month: i32) -> (i64, i64) {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    (i64::from(year) + 4800 - a, month + 12 * a - 3)
}

fn decompose(f: i64, time_of_day: f64) -> CalendarDate {
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    CalendarDate::new(saturate_year(year), month as u8, day as u8, time_of_day)
}
