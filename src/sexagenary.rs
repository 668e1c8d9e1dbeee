//! 干支: the sexagenary cycle of ten stems and twelve branches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    BRANCHES, GANZHI_JDN_OFFSET, SEXAGENARY_CYCLE, SHUODAN_DONGZHI_DAY, STEMS, YEAR_OFFSET_BCE,
    YEAR_OFFSET_CE,
};
use crate::types::civil_day;
use crate::western;

/// One term of the sexagenary cycle, `0` being 甲子 and `59` 癸亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StemBranch(u8);

/// Error type for sexagenary label parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SexagenaryError {
    /// Not a stem followed by a branch.
    #[error("Invalid stem-branch label: {0}")]
    InvalidLabel(String),

    /// Stems and branches only pair up when both indices share parity.
    #[error("{stem}{branch} is not a term of the sexagenary cycle")]
    NotInCycle {
        stem:   &'static str,
        branch: &'static str,
    },
}

impl StemBranch {
    /// 甲子, the first term
    pub const JIAZI: Self = Self(0);

    /// Term `n` of the cycle, wrapping in both directions.
    pub const fn new(n: i64) -> Self {
        Self(n.rem_euclid(SEXAGENARY_CYCLE) as u8)
    }

    /// Pairs a stem index (`0..10`) with a branch index (`0..12`).
    ///
    /// # Errors
    /// Returns `SexagenaryError::NotInCycle` if the indices differ in parity,
    /// or `InvalidLabel` if either is out of range.
    pub fn from_parts(stem_index: u8, branch_index: u8) -> Result<Self, SexagenaryError> {
        let (Some(stem), Some(branch)) = (
            STEMS.get(usize::from(stem_index)),
            BRANCHES.get(usize::from(branch_index)),
        ) else {
            return Err(SexagenaryError::InvalidLabel(format!(
                "stem {stem_index}, branch {branch_index}"
            )));
        };
        (0..SEXAGENARY_CYCLE as u8)
            .find(|n| n % 10 == stem_index && n % 12 == branch_index)
            .map(Self)
            .ok_or(SexagenaryError::NotInCycle {
                stem:   *stem,
                branch: *branch,
            })
    }

    /// Position in the cycle, `0..60`
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn stem_index(self) -> u8 {
        self.0 % 10
    }

    #[inline]
    pub const fn branch_index(self) -> u8 {
        self.0 % 12
    }

    pub const fn stem(self) -> &'static str {
        STEMS[self.stem_index() as usize]
    }

    pub const fn branch(self) -> &'static str {
        BRANCHES[self.branch_index() as usize]
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}

impl FromStr for StemBranch {
    type Err = SexagenaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || SexagenaryError::InvalidLabel(trimmed.to_owned());

        let mut chars = trimmed.char_indices();
        chars.next().ok_or_else(invalid)?;
        let (split, _) = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let (stem, branch) = trimmed.split_at(split);

        let stem_index = STEMS.iter().position(|c| *c == stem).ok_or_else(invalid)?;
        let branch_index = BRANCHES
            .iter()
            .position(|c| *c == branch)
            .ok_or_else(invalid)?;
        Self::from_parts(stem_index as u8, branch_index as u8)
    }
}

impl Serialize for StemBranch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for StemBranch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Stem-branch of an arbitrary integer, periodic with period 60.
///
/// # Example
///
/// ```
/// use zcal::sexagenary::stem_branch;
///
/// assert_eq!("甲子", stem_branch(0).to_string());
/// assert_eq!("癸亥", stem_branch(-1).to_string());
/// ```
pub const fn stem_branch(n: i64) -> StemBranch {
    StemBranch::new(n)
}

/// Stem-branch of the civil day containing `jd`, counted from the 甲子 day of
/// [`SHUODAN_DONGZHI_JD`](crate::SHUODAN_DONGZHI_JD).
///
/// # Example
///
/// ```
/// use zcal::sexagenary::jd_to_stem_branch;
///
/// assert_eq!("甲子", jd_to_stem_branch(2_226_910.5).to_string());
/// ```
pub fn jd_to_stem_branch(jd: f64) -> StemBranch {
    stem_branch(civil_day(jd) - SHUODAN_DONGZHI_DAY)
}

/// Stem-branch of the civil day containing `jd`, counted from day number 11.
/// Reads the same day number as [`jd_to_stem_branch`], so the two always
/// agree.
pub fn jd_to_ganzhi(jd: f64) -> StemBranch {
    stem_branch(civil_day(jd) - GANZHI_JDN_OFFSET)
}

/// Stem-branch of a civil year. There is no year zero: `-1` is 1 BC.
///
/// A `year` of `0` gives the same result as `-1`.
///
/// # Example
///
/// ```
/// use zcal::sexagenary::western_year_to_stem_branch;
///
/// assert_eq!("庚申", western_year_to_stem_branch(-841).to_string());
/// assert_eq!("壬子", western_year_to_stem_branch(1912).to_string());
/// ```
pub const fn western_year_to_stem_branch(year: i32) -> StemBranch {
    let offset = if year < 0 {
        YEAR_OFFSET_BCE
    } else {
        YEAR_OFFSET_CE
    };
    stem_branch((year as i64 - offset as i64).rem_euclid(SEXAGENARY_CYCLE))
}

/// Stem-branch of a civil Western date, read as Julian before 1582-10 and as
/// Gregorian from then on.
pub fn western_calendar_to_stem_branch(year: i32, month: i32, day: i32) -> StemBranch {
    jd_to_stem_branch(western::western_to_jd(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::western::{gregorian_to_jd, julian_to_jd};

    #[test]
    fn test_stem_branch_labels() {
        for (n, label) in [
            (0, "甲子"),
            (1, "乙丑"),
            (10, "甲戌"),
            (12, "丙子"),
            (59, "癸亥"),
            (60, "甲子"),
            (-1, "癸亥"),
            (-11, "癸丑"),
            (-60, "甲子"),
        ] {
            assert_eq!(stem_branch(n).to_string(), label, "n = {n}");
        }
    }

    #[test]
    fn test_stem_branch_period() {
        for n in -10_000..10_000 {
            assert_eq!(stem_branch(n), stem_branch(n + 60), "n = {n}");
            let sb = stem_branch(n);
            assert_eq!(i64::from(sb.stem_index()), n.rem_euclid(10));
            assert_eq!(i64::from(sb.branch_index()), n.rem_euclid(12));
        }
    }

    #[test]
    fn test_jd_to_stem_branch() {
        let cases = [
            (-360_469.5, "甲子"),
            (-61.5, "壬子"),
            (-60.88, "壬子"),
            (-1.5, "壬子"),
            (-0.88, "壬子"),
            (-0.5, "癸丑"),
            (-0.22, "癸丑"),
            (0.0, "癸丑"),
            (0.11, "癸丑"),
            (0.5, "甲寅"),
            (10.5, "甲子"),
            (15.5, "己巳"),
            (1_458_495.5, "己巳"),
            (1_644_659.5, "癸丑"),
            (1_644_659.88, "癸丑"),
            (1_644_660.11, "癸丑"),
            (2_419_402.5, "丙子"),
            (2_226_910.5, "甲子"),
            (2_226_910.88, "甲子"),
            (2_226_911.11, "甲子"),
            (2_457_979.5, "癸酉"),
        ];
        for (jd, label) in cases {
            assert_eq!(jd_to_stem_branch(jd).to_string(), label, "JD {jd}");
            assert_eq!(jd_to_ganzhi(jd).to_string(), label, "JD {jd} (ganzhi)");
        }
    }

    #[test]
    fn test_both_anchors_agree() {
        let mut jd = -1_644_659.5;
        while jd < 1_644_659.5 {
            assert_eq!(jd_to_stem_branch(jd), jd_to_ganzhi(jd), "JD {jd}");
            assert_eq!(
                jd_to_stem_branch(jd + 0.37),
                jd_to_ganzhi(jd + 0.37),
                "JD {}",
                jd + 0.37
            );
            jd += 97.0;
        }
    }

    #[test]
    fn test_anchors_agree_at_half_days() {
        assert_eq!(civil_day(crate::SHUODAN_DONGZHI_JD), SHUODAN_DONGZHI_DAY);
        assert_eq!((SHUODAN_DONGZHI_DAY - GANZHI_JDN_OFFSET).rem_euclid(SEXAGENARY_CYCLE), 0);

        // One ulp below midnight still belongs to the day before
        for day in [-360_470_i64, -62, -1, 0, 13_438, 943_068, 2_226_910, 2_457_979] {
            let midnight = day as f64 + 0.5;
            let before = midnight.next_down();
            assert_eq!(jd_to_stem_branch(before), jd_to_ganzhi(before), "JD {before:?}");
            assert_eq!(jd_to_stem_branch(before), stem_branch(day - GANZHI_JDN_OFFSET));
            assert_eq!(jd_to_stem_branch(midnight), stem_branch(day + 1 - GANZHI_JDN_OFFSET));
            assert_eq!(jd_to_ganzhi(midnight.next_up()), jd_to_stem_branch(midnight));
        }

        let mut day = -2_000_000_i64;
        while day < 3_000_000 {
            let before = (day as f64 + 0.5).next_down();
            assert_eq!(jd_to_stem_branch(before), jd_to_ganzhi(before), "JD {before:?}");
            day += 7_919;
        }
    }

    #[test]
    fn test_western_year_to_stem_branch() {
        for (year, label) in [
            (-2697, "甲子"),
            (-841, "庚申"),
            (-221, "庚辰"),
            (-1, "庚申"),
            (0, "庚申"),
            (1, "辛酉"),
            (4, "甲子"),
            (1384, "甲子"),
            (1894, "甲午"),
            (1912, "壬子"),
            (2012, "壬辰"),
        ] {
            assert_eq!(
                western_year_to_stem_branch(year).to_string(),
                label,
                "year {year}"
            );
        }
    }

    #[test]
    fn test_western_calendar_to_stem_branch() {
        assert_eq!(
            western_calendar_to_stem_branch(1384, 12, 13).to_string(),
            "甲子"
        );
        assert_eq!(western_calendar_to_stem_branch(1912, 1, 1).to_string(), "丙子");
        assert_eq!(
            western_calendar_to_stem_branch(2017, 8, 14).to_string(),
            "癸酉"
        );
    }

    #[test]
    fn test_calendar_switch_boundary() {
        // Gregorian rules from 1582-10 on
        for (y, m, d) in [(1582, 10, 1), (1582, 10, 15), (1582, 11, 30), (1600, 1, 1)] {
            assert_eq!(
                western_calendar_to_stem_branch(y, m, d),
                jd_to_stem_branch(gregorian_to_jd(y, m, d)),
                "{y}-{m:02}-{d:02}"
            );
        }
        // Julian rules strictly before, with civil BC years
        for (y, m, d) in [(1582, 9, 30), (1582, 1, 1), (1000, 6, 1)] {
            assert_eq!(
                western_calendar_to_stem_branch(y, m, d),
                jd_to_stem_branch(julian_to_jd(y, m, d)),
                "{y}-{m:02}-{d:02}"
            );
        }
        assert_eq!(
            western_calendar_to_stem_branch(-841, 2, 12),
            jd_to_stem_branch(julian_to_jd(-840, 2, 12))
        );
        // 1582-09-30 (Julian) is five days before 1582-10-15 (Gregorian)
        let last_julian = western_calendar_to_stem_branch(1582, 9, 30);
        assert_eq!(
            stem_branch(i64::from(last_julian.index()) + 5),
            western_calendar_to_stem_branch(1582, 10, 15)
        );
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(StemBranch::from_parts(0, 0), Ok(StemBranch::JIAZI));
        assert_eq!(StemBranch::from_parts(9, 11).map(StemBranch::index), Ok(59));
        assert!(matches!(
            StemBranch::from_parts(0, 1),
            Err(SexagenaryError::NotInCycle {
                stem: "甲",
                branch: "丑"
            })
        ));
        assert!(matches!(
            StemBranch::from_parts(10, 0),
            Err(SexagenaryError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_parse_label() {
        for n in 0..60 {
            let sb = stem_branch(n);
            assert_eq!(sb.to_string().parse::<StemBranch>(), Ok(sb));
        }
        assert_eq!(" 庚申 ".parse::<StemBranch>(), Ok(stem_branch(56)));
    }

    #[test]
    fn test_parse_invalid_label() {
        for label in ["", "甲", "甲子丑", "子甲", "ab", "甲x"] {
            assert!(
                matches!(
                    label.parse::<StemBranch>(),
                    Err(SexagenaryError::InvalidLabel(_))
                ),
                "{label:?} should be rejected"
            );
        }
        let err = "甲丑".parse::<StemBranch>().unwrap_err();
        assert_eq!(err.to_string(), "甲丑 is not a term of the sexagenary cycle");
    }

    #[test]
    fn test_serde_label() {
        let sb = stem_branch(56);
        let json = serde_json::to_string(&sb).unwrap();
        assert_eq!(json, r#""庚申""#);
        let parsed: StemBranch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sb);

        let result: Result<StemBranch, _> = serde_json::from_str(r#""甲丑""#);
        assert!(result.is_err());
    }
}
