//! The Gonghe calendar (共和曆).
//!
//! Year 1 begins on 立春 of 841 BC, the first year of the Gonghe regency. A
//! year has twelve months alternating 30 and 31 days, starting with a 30-day
//! month; the twelfth month is cut to 30 days in common years. Leap years
//! follow the Gregorian 4/100 rule with every 500th year restored, which gives
//! exactly [`GONGHE_CYCLE_DAYS`] days per 500 years.
//!
//! Year numbering is continuous: year 0 precedes year 1.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_YEAR, GONGHE_CYCLE, GONGHE_CYCLE_DAYS, GONGHE_FIRST_DAY,
    GONGHE_FIRST_DAY_JD, GONGHE_MONTH_PAIR, GONGHE_SHORT_MONTH, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::types::{CalendarDate, saturate_year, split_jd};
use crate::western;

/// Gonghe leap rule.
pub const fn is_gonghe_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GONGHE_CYCLE == 0
}

/// Days in a Gonghe year: 365 or 366.
pub const fn gonghe_year_length(year: i32) -> i64 {
    if is_gonghe_leap_year(year) {
        DAYS_IN_YEAR + 1
    } else {
        DAYS_IN_YEAR
    }
}

pub const fn gonghe_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == MAX_MONTH && !is_gonghe_leap_year(year)) {
        30
    } else {
        31
    }
}

/// Converts a Gonghe date to the JD of its starting midnight.
///
/// # Example
///
/// ```
/// use zcal::gonghe::gonghe_to_jd;
///
/// assert_eq!(1_414_289.5, gonghe_to_jd(1, 1, 1));
/// ```
pub fn gonghe_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let m = i64::from(month) - 1;
    let offset = days_before_year(i64::from(year) - 1)
        + m * GONGHE_SHORT_MONTH
        + m.div_euclid(2)
        + i64::from(day)
        - 1;
    offset as f64 + GONGHE_FIRST_DAY_JD
}

/// Converts a JD to a Gonghe date.
///
/// JDs beyond [`JD_LIMIT`](crate::JD_LIMIT) read as the limit.
///
/// # Example
///
/// ```
/// use zcal::gonghe::jd_to_gonghe;
///
/// let date = jd_to_gonghe(1_414_289.5 + 365.0);
/// assert_eq!((2, 1, 1), date.ymd());
/// ```
pub fn jd_to_gonghe(jd: f64) -> CalendarDate {
    let (day_number, time_of_day) = split_jd(jd);
    let mut offset = day_number - GONGHE_FIRST_DAY;

    // Shift dates before the epoch forward by whole leap cycles and undo it on
    // the year at the end.
    let cycles = if offset < 0 {
        -offset.div_euclid(GONGHE_CYCLE_DAYS)
    } else {
        0
    };
    offset += cycles * GONGHE_CYCLE_DAYS;

    // zero-based year and day of year
    let mut y = offset * i64::from(GONGHE_CYCLE) / GONGHE_CYCLE_DAYS;
    let mut day_of_year = offset - days_before_year(y);
    while day_of_year < 0 {
        y -= 1;
        day_of_year += gonghe_year_length(saturate_year(y + 1));
    }
    while day_of_year >= gonghe_year_length(saturate_year(y + 1)) {
        day_of_year -= gonghe_year_length(saturate_year(y + 1));
        y += 1;
    }

    let pair = day_of_year / GONGHE_MONTH_PAIR;
    let rest = day_of_year % GONGHE_MONTH_PAIR;
    let (month, day) = if rest < GONGHE_SHORT_MONTH {
        (2 * pair + 1, rest + 1)
    } else {
        (2 * pair + 2, rest - GONGHE_SHORT_MONTH + 1)
    };

    let year = y + 1 - cycles * i64::from(GONGHE_CYCLE);
    CalendarDate::new(saturate_year(year), month as u8, day as u8, time_of_day)
}

/// Converts a civil Western date to a Gonghe date.
///
/// # Example
///
/// ```
/// use zcal::gonghe::western_to_gonghe;
///
/// assert_eq!((1, 1, 1), western_to_gonghe(-841, 2, 12).ymd());
/// ```
pub fn western_to_gonghe(year: i32, month: i32, day: i32) -> CalendarDate {
    jd_to_gonghe(western::western_to_jd(year, month, day))
}

/// Converts a Gonghe date to a civil Western date.
pub fn gonghe_to_western(year: i32, month: i32, day: i32) -> CalendarDate {
    western::jd_to_western(gonghe_to_jd(year, month, day))
}

/// Days from the start of year 1 to the start of the year after `y` years,
/// counting the leap days of years `1..=y` (or minus those of `y+1..=0`).
fn days_before_year(y: i64) -> i64 {
    y * DAYS_IN_YEAR + y.div_euclid(i64::from(LEAP_YEAR_CYCLE))
        - y.div_euclid(i64::from(CENTURY_CYCLE))
        + y.div_euclid(i64::from(GONGHE_CYCLE))
}
