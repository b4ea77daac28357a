use crate::domain::model::{LunarDate, SolarDate};
use crate::utils::error::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};
use std::f64::consts::PI;

/// Earliest solar year of the advertised span.
pub const MIN_SOLAR_YEAR: i32 = 1900;
/// Latest solar year of the advertised span.
pub const MAX_SOLAR_YEAR: i32 = 2199;

/// Slack beyond the advertised span in which conversions still work.
/// Edge-month grids need their lead and trail cells, and the last lunar
/// month of the top year runs several weeks past the solar year end.
const SPAN_GRACE_DAYS: u64 = 60;

/// Vietnam civil time. The lunar calendar is defined by the local day a
/// new moon falls on, so the offset is part of the calendar itself.
const TIME_ZONE_HOURS: f64 = 7.0;

/// Mean length of a synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Julian day of the new moon used as lunation epoch (k = 0).
const NEW_MOON_EPOCH_JD: f64 = 2_415_021.076_998_695;

/// Offset between chrono's day count from 0001-01-01 and the Julian day
/// number (noon-based).
const JDN_FROM_CE: i64 = 1_721_425;

/// Bidirectional converter between Gregorian dates and the Vietnamese
/// lunar calendar, computed from new-moon and solar-term instants at
/// UTC+7. Stateless; every method is a pure function.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunarSolarConverter;

impl LunarSolarConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn solar_to_lunar(&self, solar: SolarDate) -> Result<LunarDate> {
        self.check_solar_range(solar)?;

        let day_number = jdn_from_naive(solar.to_naive());
        let k = ((day_number as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;
        let mut month_start = new_moon_day(k + 1);
        if month_start > day_number {
            month_start = new_moon_day(k);
        }

        // Anchor on the month containing the winter solstice (lunar month
        // 11) of this solar year and the previous or next one.
        let mut a11 = lunar_month_11(solar.year());
        let mut b11 = a11;
        let mut lunar_year;
        if a11 >= month_start {
            lunar_year = solar.year();
            a11 = lunar_month_11(solar.year() - 1);
        } else {
            lunar_year = solar.year() + 1;
            b11 = lunar_month_11(solar.year() + 1);
        }

        let lunar_day = (day_number - month_start + 1) as u32;
        let diff = (month_start - a11) / 29;
        let mut is_leap_month = false;
        let mut lunar_month = diff + 11;
        if b11 - a11 > 365 {
            let leap_diff = leap_month_offset(a11);
            if diff >= leap_diff {
                lunar_month = diff + 10;
                if diff == leap_diff {
                    is_leap_month = true;
                }
            }
        }
        if lunar_month > 12 {
            lunar_month -= 12;
        }
        if lunar_month >= 11 && diff < 4 {
            lunar_year -= 1;
        }

        Ok(LunarDate::new(
            lunar_year,
            lunar_month as u32,
            lunar_day,
            is_leap_month,
        ))
    }

    pub fn lunar_to_solar(&self, lunar: LunarDate) -> Result<SolarDate> {
        let (month_start, next_start) = self.lunar_month_span(lunar.year, lunar.month, lunar.is_leap_month)?;
        let length = (next_start - month_start) as u32;
        if lunar.day < 1 || lunar.day > length {
            return Err(CalendarError::InvalidLunarDate {
                year: lunar.year,
                month: lunar.month,
                leap: lunar.is_leap_month,
                reason: format!("day {} outside 1..={}", lunar.day, length),
            });
        }
        Ok(SolarDate::from(naive_from_jdn(
            month_start + lunar.day as i64 - 1,
        )))
    }

    /// Length in days (29 or 30) of the requested lunar month. Replaces the
    /// probe-until-failure loop of naive implementations with a direct
    /// new-moon difference.
    pub fn lunar_month_length(&self, year: i32, month: u32, is_leap_month: bool) -> Result<u32> {
        let (month_start, next_start) = self.lunar_month_span(year, month, is_leap_month)?;
        Ok((next_start - month_start) as u32)
    }

    /// Julian day numbers of the first day of the requested lunar month and
    /// of the following month. Validates that the month exists.
    fn lunar_month_span(&self, year: i32, month: u32, is_leap_month: bool) -> Result<(i64, i64)> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidLunarDate {
                year,
                month,
                leap: is_leap_month,
                reason: "month must be in 1..=12".into(),
            });
        }
        // The first solar days of the span map into the preceding lunar
        // year, which must stay addressable for round-trips.
        if year < MIN_SOLAR_YEAR - 1 || year > MAX_SOLAR_YEAR {
            return Err(CalendarError::OutOfRange {
                year,
                min: MIN_SOLAR_YEAR - 1,
                max: MAX_SOLAR_YEAR,
            });
        }

        let (a11, b11) = if month < 11 {
            (lunar_month_11(year - 1), lunar_month_11(year))
        } else {
            (lunar_month_11(year), lunar_month_11(year + 1))
        };
        let k = (0.5 + (a11 as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH).floor() as i64;

        let mut off = month as i64 - 11;
        if off < 0 {
            off += 12;
        }
        if b11 - a11 > 365 {
            // Leap lunar year: months at or past the intercalary one shift
            // by one lunation.
            let leap_off = leap_month_offset(a11);
            let mut leap_month = leap_off - 2;
            if leap_month < 0 {
                leap_month += 12;
            }
            if is_leap_month && month as i64 != leap_month {
                return Err(CalendarError::InvalidLunarDate {
                    year,
                    month,
                    leap: true,
                    reason: format!("leap month of lunar year {} is month {}", year, leap_month),
                });
            }
            if is_leap_month || off >= leap_off {
                off += 1;
            }
        } else if is_leap_month {
            return Err(CalendarError::InvalidLunarDate {
                year,
                month,
                leap: true,
                reason: format!("lunar year {} has no leap month", year),
            });
        }

        let month_start = new_moon_day(k + off);
        let next_start = new_moon_day(k + off + 1);
        Ok((month_start, next_start))
    }

    fn check_solar_range(&self, solar: SolarDate) -> Result<()> {
        let date = solar.to_naive();
        let min = NaiveDate::from_ymd_opt(MIN_SOLAR_YEAR, 1, 1)
            .and_then(|d| d.checked_sub_days(Days::new(SPAN_GRACE_DAYS)))
            .unwrap_or(NaiveDate::MIN);
        let max = NaiveDate::from_ymd_opt(MAX_SOLAR_YEAR, 12, 31)
            .and_then(|d| d.checked_add_days(Days::new(SPAN_GRACE_DAYS)))
            .unwrap_or(NaiveDate::MAX);
        if date < min || date > max {
            return Err(CalendarError::OutOfRange {
                year: solar.year(),
                min: MIN_SOLAR_YEAR,
                max: MAX_SOLAR_YEAR,
            });
        }
        Ok(())
    }
}

fn jdn_from_naive(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_FROM_CE
}

fn naive_from_jdn(jdn: i64) -> NaiveDate {
    // Only reached for dates derived from in-range lunar months, which all
    // sit comfortably inside chrono's representable span.
    NaiveDate::from_num_days_from_ce_opt((jdn - JDN_FROM_CE) as i32)
        .unwrap_or(NaiveDate::MAX)
}

/// Julian day (as a fraction, in dynamical time) of the k-th new moon after
/// the 1900 epoch. Truncated series from Meeus, "Astronomical Algorithms".
fn new_moon(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * dr).sin();

    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let mut c1 = (0.1734 - 0.000_393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 = c1 - 0.4068 * (mpr * dr).sin() + 0.0161 * (2.0 * dr * mpr).sin();
    c1 -= 0.0004 * (3.0 * dr * mpr).sin();
    c1 = c1 + 0.0104 * (2.0 * dr * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();

    let deltat = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };

    jd1 + c1 - deltat
}

/// Local calendar day (Julian day number at UTC+7) on which the k-th new
/// moon falls.
fn new_moon_day(k: i64) -> i64 {
    (new_moon(k) + 0.5 + TIME_ZONE_HOURS / 24.0).floor() as i64
}

/// Apparent ecliptic longitude of the sun, in radians in [0, 2π).
fn sun_longitude(jdn: f64) -> f64 {
    let t = (jdn - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    let dr = PI / 180.0;

    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (dr * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (dr * 2.0 * m).sin() + 0.000_290 * (dr * 3.0 * m).sin();

    let mut l = (l0 + dl) * dr;
    l -= 2.0 * PI * (l / (2.0 * PI)).floor();
    l
}

/// Index (0..=11) of the major solar term the sun is in at local midnight
/// starting the given day. 30° per term, 0 = vernal equinox.
fn major_term(jdn: i64) -> i64 {
    (sun_longitude(jdn as f64 - 0.5 - TIME_ZONE_HOURS / 24.0) / PI * 6.0).floor() as i64
}

/// Julian day number of the first day of lunar month 11 of the given solar
/// year: the lunar month containing the winter solstice.
fn lunar_month_11(year: i32) -> i64 {
    let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX);
    let off = jdn_from_naive(dec_31) - 2_415_021;
    let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
    let mut nm = new_moon_day(k);
    if major_term(nm) >= 9 {
        nm = new_moon_day(k - 1);
    }
    nm
}

/// Position of the leap month after the month-11 anchor `a11`: the first
/// subsequent lunation that contains no major term.
fn leap_month_offset(a11: i64) -> i64 {
    let k = ((a11 as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut i = 1;
    let mut arc = major_term(new_moon_day(k + i));
    loop {
        let last = arc;
        i += 1;
        arc = major_term(new_moon_day(k + i));
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}
