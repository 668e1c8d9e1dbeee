//! Searches for 朔旦冬至 epochs: years whose winter solstice falls on the same
//! civil day as a new moon, on a 甲子 day.
//!
//! These are the anchors traditional calendars were reckoned from.
//! [`SHUODAN_DONGZHI_JD`](crate::SHUODAN_DONGZHI_JD) is the 1384 instance.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::ephemeris::{Ephemeris, EphemerisError, jd_to_julian_year};
use crate::sexagenary::{StemBranch, jd_to_stem_branch};
use crate::types::{CalendarDate, civil_day};
use crate::weekday::Weekday;
use crate::western::jd_to_julian;

/// A year whose solstice and new moon meet on a 甲子 day.
///
/// JDs are in UTC. `date` is the Julian-calendar day of the solstice in the
/// zone the search ran with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochCandidate {
    pub year:             i32,
    pub date:             CalendarDate,
    pub stem_branch:      StemBranch,
    pub weekday:          Weekday,
    pub solstice_jd:      f64,
    pub new_moon_jd:      f64,
    /// Absolute distance between the two instants, in days
    pub separation:       f64,
    pub utc_offset_hours: f64,
}

/// Winter solstice of `year` and the new moon nearest it, both shifted by
/// `tz_hours`.
///
/// # Errors
/// Propagates any `EphemerisError` from the provider.
pub fn dongzhi_and_shuo<E: Ephemeris + ?Sized>(
    eph: &E,
    year: i32,
    tz_hours: f64,
) -> Result<(f64, f64), EphemerisError> {
    let offset = tz_hours / 24.0;
    let solstice = eph.winter_solstice_jd(year)?;
    let new_moon = eph.new_moon_near(jd_to_julian_year(solstice))?;
    Ok((solstice + offset, new_moon + offset))
}

/// `true` if both instants fall on the same civil day.
pub fn same_civil_day(a: f64, b: f64) -> bool {
    civil_day(a) == civil_day(b)
}

/// Years in `years` whose solstice and nearest new moon share a civil day
/// in the zone `tz_hours` east of UTC, with that day being 甲子.
///
/// Years the provider has no data for are skipped.
///
/// # Errors
/// Any provider error other than missing data aborts the search.
pub fn find_shuodan_dongzhi<E: Ephemeris + ?Sized>(
    eph: &E,
    years: RangeInclusive<i32>,
    tz_hours: f64,
) -> Result<Vec<EpochCandidate>, EphemerisError> {
    search(eph, years, tz_hours, |solstice, new_moon| {
        let (local_solstice, local_new_moon) = shift(solstice, new_moon, tz_hours);
        same_civil_day(local_solstice, local_new_moon)
            && jd_to_stem_branch(local_solstice) == StemBranch::JIAZI
    })
}

/// Like [`find_shuodan_dongzhi`], but the coincidence must hold both in UTC
/// and in the zone `tz_hours` east of it, with the two instants under half a
/// day apart.
///
/// # Errors
/// Any provider error other than missing data aborts the search.
pub fn find_shuodan_dongzhi_in_zone<E: Ephemeris + ?Sized>(
    eph: &E,
    years: RangeInclusive<i32>,
    tz_hours: f64,
) -> Result<Vec<EpochCandidate>, EphemerisError> {
    search(eph, years, tz_hours, |solstice, new_moon| {
        let (local_solstice, local_new_moon) = shift(solstice, new_moon, tz_hours);
        same_civil_day(solstice, new_moon)
            && same_civil_day(local_solstice, local_new_moon)
            && (solstice - new_moon).abs() < 0.5
            && jd_to_stem_branch(solstice) == StemBranch::JIAZI
            && jd_to_stem_branch(local_solstice) == StemBranch::JIAZI
    })
}

fn shift(solstice: f64, new_moon: f64, tz_hours: f64) -> (f64, f64) {
    let offset = tz_hours / 24.0;
    (solstice + offset, new_moon + offset)
}

/// Drives a search over `years`; `accept` sees UTC instants.
fn search<E, F>(
    eph: &E,
    years: RangeInclusive<i32>,
    tz_hours: f64,
    accept: F,
) -> Result<Vec<EpochCandidate>, EphemerisError>
where
    E: Ephemeris + ?Sized,
    F: Fn(f64, f64) -> bool,
{
    let mut found = Vec::new();
    for year in years {
        let (solstice, new_moon) = match dongzhi_and_shuo(eph, year, 0.0) {
            Ok(pair) => pair,
            Err(e) if e.is_missing_data() => {
                debug!(year, error = %e, "skipping year");
                continue;
            }
            Err(e) => return Err(e),
        };
        trace!(year, solstice, new_moon, "checking year");

        if !accept(solstice, new_moon) {
            continue;
        }

        let (local_solstice, _) = shift(solstice, new_moon, tz_hours);
        let candidate = EpochCandidate {
            year,
            date: jd_to_julian(local_solstice),
            stem_branch: jd_to_stem_branch(local_solstice),
            weekday: Weekday::from_jd(local_solstice),
            solstice_jd: solstice,
            new_moon_jd: new_moon,
            separation: (solstice - new_moon).abs(),
            utc_offset_hours: tz_hours,
        };
        info!(year, date = %candidate.date, separation = candidate.separation, "found epoch");
        found.push(candidate);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::TableEphemeris;

    // Solstice and new moon of 1384 both land on 1384-12-13, a 甲子 day.
    const TABLE: &str = "\
1384    2226910.60    2226910.70  2226940.23
1385    2227275.85    2227270.10
1386    2227641.00    2227641.10
";

    struct FailingEphemeris;

    impl Ephemeris for FailingEphemeris {
        fn winter_solstice_jd(&self, year: i32) -> Result<f64, EphemerisError> {
            if year < 0 {
                Err(EphemerisError::NoSolstice(year))
            } else {
                Err(EphemerisError::Provider("offline".to_string()))
            }
        }

        fn new_moon_near(&self, julian_year: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::NoNewMoon(julian_year))
        }
    }

    #[test]
    fn test_same_civil_day() {
        assert!(same_civil_day(2_226_910.5, 2_226_911.49));
        assert!(same_civil_day(-0.5, 0.25));
        assert!(!same_civil_day(2_226_910.49, 2_226_910.5));
        assert!(!same_civil_day(-0.51, -0.5));
        assert!(!same_civil_day(2_226_910.5_f64.next_down(), 2_226_910.5));
        assert!(same_civil_day(2_226_910.5_f64.next_down(), 2_226_909.5));
    }

    #[test]
    fn test_dongzhi_and_shuo() {
        let table: TableEphemeris = TABLE.parse().unwrap();

        let (s, m) = dongzhi_and_shuo(&table, 1384, 0.0).unwrap();
        assert_eq!((s, m), (2_226_910.6, 2_226_910.7));

        let (s, m) = dongzhi_and_shuo(&table, 1384, 12.0).unwrap();
        assert!((s - 2_226_911.1).abs() < 1e-9);
        assert!((m - 2_226_911.2).abs() < 1e-9);

        assert_eq!(
            dongzhi_and_shuo(&table, 1300, 0.0),
            Err(EphemerisError::NoSolstice(1300))
        );
    }

    #[test]
    fn test_find_1384() {
        let table: TableEphemeris = TABLE.parse().unwrap();

        for tz in [0.0, 8.0] {
            let found = find_shuodan_dongzhi(&table, 1380..=1390, tz).unwrap();
            assert_eq!(found.len(), 1, "UTC{tz:+}");

            let epoch = &found[0];
            assert_eq!(epoch.year, 1384);
            assert_eq!(epoch.date.ymd(), (1384, 12, 13));
            assert_eq!(epoch.stem_branch, StemBranch::JIAZI);
            assert_eq!(epoch.solstice_jd, 2_226_910.6);
            assert_eq!(epoch.new_moon_jd, 2_226_910.7);
            assert!((epoch.separation - 0.1).abs() < 1e-6);
            assert_eq!(epoch.utc_offset_hours, tz);
        }
    }

    #[test]
    fn test_find_in_zone() {
        let table: TableEphemeris = TABLE.parse().unwrap();
        let found = find_shuodan_dongzhi_in_zone(&table, 1384..=1386, 8.0).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date.ymd(), (1384, 12, 13));
    }

    #[test]
    fn test_zone_search_is_stricter() {
        // Same UTC day, but the new moon crosses midnight at UTC+8 and the
        // two instants are more than half a day apart.
        let table: TableEphemeris = "1384 2226910.60 2226911.45".parse().unwrap();

        assert_eq!(find_shuodan_dongzhi(&table, 1384..=1384, 0.0).unwrap().len(), 1);
        assert!(find_shuodan_dongzhi(&table, 1384..=1384, 8.0).unwrap().is_empty());
        assert!(
            find_shuodan_dongzhi_in_zone(&table, 1384..=1384, 8.0)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_rejects_other_days() {
        let table: TableEphemeris = TABLE.parse().unwrap();
        // 1385 misses the new moon by days; 1386 coincides on a 甲戌 day.
        assert!(find_shuodan_dongzhi(&table, 1385..=1386, 0.0).unwrap().is_empty());
        assert!(find_shuodan_dongzhi(&table, 1385..=1386, 8.0).unwrap().is_empty());
    }

    #[test]
    fn test_error_handling() {
        // Missing data is skipped
        let found = find_shuodan_dongzhi(&FailingEphemeris, -10..=-1, 0.0).unwrap();
        assert!(found.is_empty());

        // Anything else aborts the search
        let err = find_shuodan_dongzhi(&FailingEphemeris, -1..=1, 0.0).unwrap_err();
        assert_eq!(err, EphemerisError::Provider("offline".to_string()));
        let err = find_shuodan_dongzhi_in_zone(&FailingEphemeris, 0..=0, 8.0).unwrap_err();
        assert_eq!(err.to_string(), "Ephemeris provider failed: offline");
    }

    #[test]
    fn test_candidate_serializes() {
        let table: TableEphemeris = TABLE.parse().unwrap();
        let found = find_shuodan_dongzhi(&table, 1384..=1384, 0.0).unwrap();
        let json = serde_json::to_value(&found[0]).unwrap();
        assert_eq!(json["year"], 1384);
        assert_eq!(json["stem_branch"], "甲子");
        assert_eq!(json["date"]["month"], 12);
    }
}
