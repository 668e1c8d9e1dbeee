use std::fmt;

use serde::Serialize;
use zcal::{CalendarDate, EpochCandidate, JulianDay, StemBranch, Weekday};

/// A single day seen through every calendar.
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub jd:          JulianDay,
    pub julian:      CalendarDate,
    pub gregorian:   CalendarDate,
    pub western:     CalendarDate,
    pub gonghe:      CalendarDate,
    pub weekday:     Weekday,
    pub stem_branch: StemBranch,
}

impl DayReport {
    pub fn new(jd: JulianDay) -> Self {
        Self {
            jd,
            julian: jd.to_julian(),
            gregorian: jd.to_gregorian(),
            western: jd.to_western(),
            gonghe: jd.to_gonghe(),
            weekday: jd.weekday(),
            stem_branch: jd.stem_branch(),
        }
    }
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "JD          {}", self.jd)?;
        writeln!(f, "Julian      {}", self.julian)?;
        writeln!(f, "Gregorian   {}", self.gregorian)?;
        writeln!(f, "Western     {}", self.western)?;
        writeln!(f, "Gonghe      {}", self.gonghe)?;
        writeln!(f, "Weekday     {:?}", self.weekday)?;
        write!(f, "Day         {}", self.stem_branch)
    }
}

#[derive(Debug, Serialize)]
pub struct YearReport {
    pub year:        i32,
    pub stem_branch: StemBranch,
}

impl fmt::Display for YearReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.stem_branch)
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EpochReport(pub Vec<EpochCandidate>);

impl fmt::Display for EpochReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no epochs found");
        }
        for (i, epoch) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:>6} {} {} {:?} | solstice {:14.6} new moon {:14.6} | apart {:.4} d | UTC{:+}",
                epoch.year,
                epoch.date,
                epoch.stem_branch,
                epoch.weekday,
                epoch.solstice_jd,
                epoch.new_moon_jd,
                epoch.separation,
                epoch.utc_offset_hours,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_report() {
        let report = DayReport::new(JulianDay::new(2_226_910.5));
        let text = report.to_string();
        assert!(text.contains("Julian      1384-12-13"), "{text}");
        assert!(text.contains("Gregorian   1384-12-21"), "{text}");
        assert!(text.ends_with("Day         甲子"), "{text}");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["jd"], 2_226_910.5);
        assert_eq!(json["weekday"], "Tuesday");
        assert_eq!(json["stem_branch"], "甲子");
    }

    #[test]
    fn test_year_report() {
        let report = YearReport {
            year:        1912,
            stem_branch: zcal::western_year_to_stem_branch(1912),
        };
        assert_eq!(report.to_string(), "1912 壬子");
    }

    #[test]
    fn test_empty_epoch_report() {
        assert_eq!(EpochReport(Vec::new()).to_string(), "no epochs found");
        assert_eq!(serde_json::to_string(&EpochReport(Vec::new())).unwrap(), "[]");
    }
}
