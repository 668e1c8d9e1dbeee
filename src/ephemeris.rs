//! Astronomical data consumed by the [`calibration`](crate::calibration)
//! searches.
//!
//! Nothing here computes planetary positions. An [`Ephemeris`] is supplied by
//! the caller; [`TableEphemeris`] reads precomputed instants from text.

use std::collections::BTreeMap;
use std::num::{ParseFloatError, ParseIntError};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::consts::{J2000_JD, JULIAN_YEAR_DAYS, SYNODIC_MONTH};

/// Source of winter-solstice and new-moon instants, as JDs.
pub trait Ephemeris {
    /// December solstice of `year` (astronomical numbering).
    ///
    /// # Errors
    /// Returns an `EphemerisError` when the provider has no data for `year`.
    fn winter_solstice_jd(&self, year: i32) -> Result<f64, EphemerisError>;

    /// New moon closest to the given Julian year (e.g. `2000.5`).
    ///
    /// # Errors
    /// Returns an `EphemerisError` when no new moon is known near that instant.
    fn new_moon_near(&self, julian_year: f64) -> Result<f64, EphemerisError>;
}

/// Error type for ephemeris lookups and table parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    #[error("No winter solstice data for year {0}")]
    NoSolstice(i32),

    #[error("No new moon within half a synodic month of Julian year {0:.4}")]
    NoNewMoon(f64),

    #[error("Line {line}: invalid year: {source}")]
    InvalidYear {
        line:   usize,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line}, field {field}: invalid JD: {source}")]
    InvalidJd {
        line:   usize,
        field:  usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("Line {line}: missing winter solstice JD")]
    MissingSolstice { line: usize },

    #[error("Line {line}: year {year} listed twice")]
    DuplicateYear { line: usize, year: i32 },

    /// Failure reported by a provider other than [`TableEphemeris`].
    #[error("Ephemeris provider failed: {0}")]
    Provider(String),
}

impl EphemerisError {
    /// `true` for lookups the provider has no data for, as opposed to
    /// malformed input.
    pub const fn is_missing_data(&self) -> bool {
        matches!(self, Self::NoSolstice(_) | Self::NoNewMoon(_))
    }
}

/// Julian year (J2000.0 based) of a JD.
pub fn jd_to_julian_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / JULIAN_YEAR_DAYS
}

/// JD of a Julian year (J2000.0 based).
pub fn julian_year_to_jd(julian_year: f64) -> f64 {
    (julian_year - 2000.0).mul_add(JULIAN_YEAR_DAYS, J2000_JD)
}

/// Ephemeris backed by a table of precomputed instants.
///
/// The text form has one record per line: a year, the JD of its winter
/// solstice, then any number of new-moon JDs. Blank lines and text after `#`
/// are ignored.
///
/// ```text
/// # year  solstice      new moons...
/// 1384    2226910.60    2226910.70  2226940.23
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableEphemeris {
    solstices: BTreeMap<i32, f64>,
    new_moons: Vec<f64>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the winter solstice of `year`, replacing any previous value.
    pub fn insert_solstice(&mut self, year: i32, jd: f64) {
        self.solstices.insert(year, jd);
    }

    /// Records a new moon, keeping the list sorted.
    pub fn insert_new_moon(&mut self, jd: f64) {
        let idx = self.new_moons.partition_point(|&x| x < jd);
        self.new_moons.insert(idx, jd);
    }

    /// First and last year with a solstice, `None` if the table is empty
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        let first = *self.solstices.keys().next()?;
        let last = *self.solstices.keys().next_back()?;
        Some(first..=last)
    }

    pub fn new_moon_count(&self) -> usize {
        self.new_moons.len()
    }
}

impl Ephemeris for TableEphemeris {
    fn winter_solstice_jd(&self, year: i32) -> Result<f64, EphemerisError> {
        self.solstices
            .get(&year)
            .copied()
            .ok_or(EphemerisError::NoSolstice(year))
    }

    fn new_moon_near(&self, julian_year: f64) -> Result<f64, EphemerisError> {
        let target = julian_year_to_jd(julian_year);
        let idx = self.new_moons.partition_point(|&jd| jd < target);
        let before = idx.checked_sub(1).and_then(|i| self.new_moons.get(i));
        let after = self.new_moons.get(idx);

        [before, after]
            .into_iter()
            .flatten()
            .copied()
            .filter(|jd| (jd - target).abs() <= SYNODIC_MONTH / 2.0)
            .min_by(|a, b| (a - target).abs().total_cmp(&(b - target).abs()))
            .ok_or(EphemerisError::NoNewMoon(julian_year))
    }
}

impl FromStr for TableEphemeris {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut table = Self::new();
        for (line, text) in (1usize..).zip(s.lines()) {
            let record = text.split('#').next().unwrap_or_default();
            let mut fields = record.split_whitespace();
            let Some(year) = fields.next() else {
                continue;
            };
            let year: i32 = year
                .parse()
                .map_err(|source| EphemerisError::InvalidYear { line, source })?;
            if table.solstices.contains_key(&year) {
                return Err(EphemerisError::DuplicateYear { line, year });
            }

            let solstice = fields
                .next()
                .ok_or(EphemerisError::MissingSolstice { line })?;
            table.insert_solstice(year, parse_jd(solstice, line, 2)?);

            for (field, value) in (3usize..).zip(fields) {
                table.insert_new_moon(parse_jd(value, line, field)?);
            }
        }
        Ok(table)
    }
}

fn parse_jd(value: &str, line: usize, field: usize) -> Result<f64, EphemerisError> {
    value
        .parse()
        .map_err(|source| EphemerisError::InvalidJd {
            line,
            field,
            source,
        })
}
