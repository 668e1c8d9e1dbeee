use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JD_LIMIT,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use crate::sexagenary::{self, StemBranch};
use crate::weekday::Weekday;
use crate::{gonghe, western};
use serde::{Deserialize, Serialize};

/// A date decomposed from a Julian Day in one of the supported calendars.
///
/// `time_of_day` is the fraction of the day elapsed since midnight, in `[0, 1)`.
/// Year numbering is astronomical (year 0 exists) unless the value came from
/// [`western::jd_to_western`], which uses civil numbering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub time_of_day: f64,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u8, day: u8, time_of_day: f64) -> Self {
        Self {
            year,
            month,
            day,
            time_of_day,
        }
    }

    /// Returns `(year, month, day)`, dropping the time of day
    pub const fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// A Julian Day: days since noon UT of -4712-01-01 (proleptic Julian calendar).
///
/// Civil days start at `.5`; `JulianDay(2451544.5)` is 2000-01-01 00:00.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    #[inline]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Returns the raw JD value
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        Self(western::gregorian_to_jd(year, month, day))
    }

    pub fn from_julian(year: i32, month: i32, day: i32) -> Self {
        Self(western::julian_to_jd(year, month, day))
    }

    pub fn from_gonghe(year: i32, month: i32, day: i32) -> Self {
        Self(gonghe::gonghe_to_jd(year, month, day))
    }

    /// Western civil date, Julian before 1582-10 and Gregorian from then on
    pub fn from_western(year: i32, month: i32, day: i32) -> Self {
        Self(western::western_to_jd(year, month, day))
    }

    pub fn to_gregorian(self) -> CalendarDate {
        western::jd_to_gregorian(self.0)
    }

    pub fn to_julian(self) -> CalendarDate {
        western::jd_to_julian(self.0)
    }

    pub fn to_gonghe(self) -> CalendarDate {
        gonghe::jd_to_gonghe(self.0)
    }

    pub fn to_western(self) -> CalendarDate {
        western::jd_to_western(self.0)
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_jd(self.0)
    }

    pub fn stem_branch(self) -> StemBranch {
        sexagenary::jd_to_stem_branch(self.0)
    }

    /// Shifts the instant by a UTC offset given in hours
    pub fn with_offset_hours(self, hours: f64) -> Self {
        Self(self.0 + hours / 24.0)
    }
}

/// The calendars with a closed-form JD conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Julian calendar, astronomical year numbering
    #[display(fmt = "julian")]
    Julian,
    /// Proleptic Gregorian calendar, astronomical year numbering
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Gonghe calendar, year 1 starting at `GONGHE_FIRST_DAY_JD`
    #[display(fmt = "gonghe")]
    Gonghe,
}

impl Calendar {
    pub fn to_jd(self, year: i32, month: i32, day: i32) -> f64 {
        match self {
            Self::Julian => western::julian_to_jd(year, month, day),
            Self::Gregorian => western::gregorian_to_jd(year, month, day),
            Self::Gonghe => gonghe::gonghe_to_jd(year, month, day),
        }
    }

    pub fn from_jd(self, jd: f64) -> CalendarDate {
        match self {
            Self::Julian => western::jd_to_julian(jd),
            Self::Gregorian => western::jd_to_gregorian(jd),
            Self::Gonghe => gonghe::jd_to_gonghe(jd),
        }
    }

    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Julian => is_julian_leap_year(year),
            Self::Gregorian => is_gregorian_leap_year(year),
            Self::Gonghe => gonghe::is_gonghe_leap_year(year),
        }
    }

    pub const fn days_in_month(self, year: i32, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        match self {
            Self::Gonghe => gonghe::gonghe_days_in_month(year, month),
            Self::Julian | Self::Gregorian => {
                if month == FEBRUARY && self.is_leap_year(year) {
                    FEBRUARY_DAYS_LEAP
                } else {
                    DAYS_IN_MONTH[month as usize]
                }
            }
        }
    }
}

// Helper functions

/// Gregorian leap rule on an astronomical year
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Julian leap rule on an astronomical year
pub const fn is_julian_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0
}

/// Largest `f64` below one
const MAX_FRACTION: f64 = 1.0 - f64::EPSILON / 2.0;

/// Splits a JD into the day number starting at the preceding midnight
/// (`floor(jd + 0.5)`) and the elapsed fraction of that day, in `[0, 1)`.
///
/// `jd + 0.5` is never formed: a JD one ulp below a half day would round up
/// onto the next day. JDs outside [`JD_LIMIT`] are clamped and NaN reads as
/// JD `-0.5`.
pub(crate) fn split_jd(jd: f64) -> (i64, f64) {
    if jd.is_nan() {
        return (0, 0.0);
    }
    let jd = jd.clamp(-JD_LIMIT, JD_LIMIT);
    let whole = jd.floor();
    let fraction = jd - whole;
    if fraction >= 0.5 {
        (whole as i64 + 1, fraction - 0.5)
    } else {
        (whole as i64, (fraction + 0.5).min(MAX_FRACTION))
    }
}

/// Day number of the civil day containing `jd`.
pub(crate) fn civil_day(jd: f64) -> i64 {
    split_jd(jd).0
}

/// Narrows a computed year to `i32`, saturating at the bounds.
pub(crate) fn saturate_year(year: i64) -> i32 {
    year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
