/// JD of the first day of Gonghe year 1 (立春, 841 BC, Julian calendar 841 BC-02-12)
pub const GONGHE_FIRST_DAY_JD: f64 = 1_414_289.5;
/// Day number (`floor(jd + 0.5)`) of `GONGHE_FIRST_DAY_JD`
pub(crate) const GONGHE_FIRST_DAY: i64 = 1_414_290;

/// JD of the 朔旦冬至 of 洪武十七年 (Julian calendar 1384-12-13).
/// This day is 甲子 and anchors the sexagenary day count.
pub const SHUODAN_DONGZHI_JD: f64 = 2_226_910.5;
/// Day number of `SHUODAN_DONGZHI_JD`
pub(crate) const SHUODAN_DONGZHI_DAY: i64 = 2_226_911;

/// JD of Gregorian 1582-10-15, the first day of the Gregorian calendar
pub const GREGORIAN_CUTOVER_JD: f64 = 2_299_160.5;

/// JDs are clamped to `-JD_LIMIT..=JD_LIMIT` before being split into days,
/// which keeps every decomposed year within `i32`.
pub const JD_LIMIT: f64 = 700_000_000_000.0;

/// Civil year of the Gregorian reform
pub const CUTOVER_YEAR: i32 = 1582;
/// First month read with Gregorian rules in `CUTOVER_YEAR`
pub const CUTOVER_MONTH: i32 = 10;

/// The ten heavenly stems (天干)
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches (地支)
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Length of the sexagenary cycle
pub const SEXAGENARY_CYCLE: i64 = 60;

/// Offset between a day number and the sexagenary index of that day
pub(crate) const GANZHI_JDN_OFFSET: i64 = 11;

/// Sexagenary offsets of civil years on each side of the missing year zero
pub(crate) const YEAR_OFFSET_CE: i32 = 4;
pub(crate) const YEAR_OFFSET_BCE: i32 = 3;

pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// ...or, in the Gonghe calendar, by 500
pub(crate) const GONGHE_CYCLE: i32 = 500;

/// Days in one full 500-year Gonghe leap cycle
pub const GONGHE_CYCLE_DAYS: i64 = 182_621;

/// Days in a common year
pub(crate) const DAYS_IN_YEAR: i64 = 365;

/// Gonghe months come in pairs of a 30-day month and a 31-day month
pub(crate) const GONGHE_SHORT_MONTH: i64 = 30;
pub(crate) const GONGHE_MONTH_PAIR: i64 = 61;

/// Maximum valid month (December), in every calendar handled here
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Julian/Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// JD of the J2000.0 epoch
pub(crate) const J2000_JD: f64 = 2_451_545.0;
/// Days in a Julian year
pub(crate) const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530_588_861;
