//! Day of the week of a JD.

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::types::civil_day;

/// Day of week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns `None` unless `index` is in `0..7`
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_jd(jd: f64) -> Self {
        Self::ALL[usize::from(jd_to_weekday(jd))]
    }
}

/// Weekday index of the civil day containing `jd`: `0` is Sunday, `6` Saturday.
///
/// # Example
///
/// ```
/// use zcal::weekday::jd_to_weekday;
///
/// assert_eq!(4, jd_to_weekday(2_451_871.5)); // Thursday, 2000-11-23
/// ```
pub fn jd_to_weekday(jd: f64) -> u8 {
    (civil_day(jd) + 1).rem_euclid(DAYS_PER_WEEK) as u8
}
