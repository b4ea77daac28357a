use crate::core::converter::{LunarSolarConverter, MAX_SOLAR_YEAR, MIN_SOLAR_YEAR};
use crate::domain::model::{LunarDate, ScheduleResult, SolarDate};
use crate::utils::error::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Gestation length assumed for a day-5 embryo transfer.
const GESTATION_DAYS: u64 = 261;
/// Days between egg retrieval and embryo transfer.
const TRANSFER_TO_RETRIEVAL_DAYS: u64 = 5;
/// Average days of ovarian stimulation before retrieval.
const RETRIEVAL_TO_STIMULATION_DAYS: u64 = 12;

/// The estimated birth date the schedule is derived from, in either
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthRef {
    Solar(SolarDate),
    Lunar(LunarDate),
}

/// Derives the three antecedent IVF milestones from an estimated birth
/// date by fixed backwards day offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleCalculator {
    converter: LunarSolarConverter,
}

impl ScheduleCalculator {
    pub fn new() -> Self {
        Self {
            converter: LunarSolarConverter::new(),
        }
    }

    pub fn compute_schedule(&self, birth_ref: BirthRef) -> Result<ScheduleResult> {
        let estimated_birth = match birth_ref {
            BirthRef::Solar(date) => date,
            BirthRef::Lunar(lunar) => self.converter.lunar_to_solar(lunar)?,
        };
        tracing::debug!("estimated birth resolved to {}", estimated_birth);

        let embryo_transfer = step_back(estimated_birth.to_naive(), GESTATION_DAYS)?;
        let egg_retrieval = step_back(embryo_transfer, TRANSFER_TO_RETRIEVAL_DAYS)?;
        let stimulation_start = step_back(egg_retrieval, RETRIEVAL_TO_STIMULATION_DAYS)?;

        Ok(ScheduleResult {
            estimated_birth,
            embryo_transfer: embryo_transfer.into(),
            egg_retrieval: egg_retrieval.into(),
            stimulation_start: stimulation_start.into(),
        })
    }
}

fn step_back(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or(CalendarError::OutOfRange {
            year: date.year(),
            min: MIN_SOLAR_YEAR,
            max: MAX_SOLAR_YEAR,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(year: i32, month: u32, day: u32) -> SolarDate {
        SolarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn worked_example() {
        let calculator = ScheduleCalculator::new();
        let result = calculator
            .compute_schedule(BirthRef::Solar(solar(2028, 1, 1)))
            .unwrap();
        assert_eq!(result.estimated_birth, solar(2028, 1, 1));
        assert_eq!(result.embryo_transfer, solar(2027, 4, 15));
        assert_eq!(result.egg_retrieval, solar(2027, 4, 10));
        assert_eq!(result.stimulation_start, solar(2027, 3, 29));
    }

    #[test]
    fn lunar_ref_matches_converted_solar_ref() {
        let calculator = ScheduleCalculator::new();
        let converter = LunarSolarConverter::new();
        let lunar = LunarDate::new(2028, 1, 1, false);
        let solar_equiv = converter.lunar_to_solar(lunar).unwrap();

        let from_lunar = calculator.compute_schedule(BirthRef::Lunar(lunar)).unwrap();
        let from_solar = calculator
            .compute_schedule(BirthRef::Solar(solar_equiv))
            .unwrap();
        assert_eq!(from_lunar, from_solar);
    }

    #[test]
    fn invalid_lunar_ref_propagates() {
        let calculator = ScheduleCalculator::new();
        // 2024 has no leap month.
        let err = calculator
            .compute_schedule(BirthRef::Lunar(LunarDate::new(2024, 4, 1, true)))
            .unwrap_err();
        assert!(matches!(err, CalendarError::InvalidLunarDate { .. }));
    }
}
