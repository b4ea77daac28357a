use crate::core::converter::{MAX_SOLAR_YEAR, MIN_SOLAR_YEAR};
use crate::utils::error::{CalendarError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_year(field_name: &str, year: i32) -> Result<()> {
    if !(MIN_SOLAR_YEAR..=MAX_SOLAR_YEAR).contains(&year) {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: year.to_string(),
            reason: format!("year must be in {}..={}", MIN_SOLAR_YEAR, MAX_SOLAR_YEAR),
        });
    }
    Ok(())
}

pub fn validate_month(field_name: &str, month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: month.to_string(),
            reason: "month must be in 1..=12".to_string(),
        });
    }
    Ok(())
}

pub fn validate_day(field_name: &str, day: u32) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(CalendarError::InvalidConfigValue {
            field: field_name.to_string(),
            value: day.to_string(),
            reason: "day must be in 1..=31".to_string(),
        });
    }
    Ok(())
}
