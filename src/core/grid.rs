use crate::core::converter::LunarSolarConverter;
use crate::domain::model::{CalendarDay, LunarDate, MainMode, SelectedDate, SolarDate};
use crate::domain::ports::HolidayLookup;
use crate::utils::error::{CalendarError, Result};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Builds the week-aligned month grid for either calendar mode.
pub struct CalendarGridBuilder<H: HolidayLookup> {
    converter: LunarSolarConverter,
    holidays: H,
}

impl<H: HolidayLookup> CalendarGridBuilder<H> {
    pub fn new(holidays: H) -> Self {
        Self {
            converter: LunarSolarConverter::new(),
            holidays,
        }
    }

    /// Returns whole Monday-start weeks covering every day of the logical
    /// (year, month) in the given mode, plus the lead/trail days needed to
    /// square off the first and last week. Never returns a partial grid:
    /// any conversion failure fails the whole build.
    pub fn build_month_grid(
        &self,
        year: i32,
        month: u32,
        mode: MainMode,
        today: SolarDate,
        selected: Option<SelectedDate>,
    ) -> Result<Vec<Vec<CalendarDay>>> {
        let (first, last) = self
            .month_bounds(year, month, mode)
            .map_err(|e| CalendarError::GridBuild {
                source: Box::new(e),
            })?;
        tracing::debug!("month bounds for {}-{} ({:?}): {} .. {}", year, month, mode, first, last);

        let start = first - Days::new(u64::from(first.weekday().num_days_from_monday()));
        let end = last + Days::new(u64::from(6 - last.weekday().num_days_from_monday()));

        let mut weeks = Vec::new();
        let mut cursor = start;
        while cursor <= end {
            let mut week = Vec::with_capacity(7);
            for offset in 0..7 {
                let date = cursor + Days::new(offset);
                week.push(self.build_cell(date, year, month, mode, today, selected)?);
            }
            weeks.push(week);
            cursor = cursor + Days::new(7);
        }
        Ok(weeks)
    }

    /// First and last solar day of the logical month. For lunar-led mode the
    /// ordinary (non-leap) month is used; leap months are not separately
    /// navigable.
    fn month_bounds(&self, year: i32, month: u32, mode: MainMode) -> Result<(NaiveDate, NaiveDate)> {
        match mode {
            MainMode::SolarLed => {
                let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(
                    CalendarError::InvalidSolarDate {
                        year,
                        month,
                        day: 1,
                    },
                )?;
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|d| d.checked_sub_days(Days::new(1)))
                    .ok_or(CalendarError::InvalidSolarDate {
                        year,
                        month,
                        day: 1,
                    })?;
                Ok((first, last))
            }
            MainMode::LunarLed => {
                let length = self.converter.lunar_month_length(year, month, false)?;
                let first = self
                    .converter
                    .lunar_to_solar(LunarDate::new(year, month, 1, false))?;
                let last = self
                    .converter
                    .lunar_to_solar(LunarDate::new(year, month, length, false))?;
                Ok((first.to_naive(), last.to_naive()))
            }
        }
    }

    fn build_cell(
        &self,
        date: NaiveDate,
        year: i32,
        month: u32,
        mode: MainMode,
        today: SolarDate,
        selected: Option<SelectedDate>,
    ) -> Result<CalendarDay> {
        let solar = SolarDate::from(date);
        let lunar = self.converter.solar_to_lunar(solar)?;
        let weekday = date.weekday();

        let is_current_period = match mode {
            MainMode::SolarLed => date.year() == year && date.month() == month,
            MainMode::LunarLed => {
                lunar.year == year && lunar.month == month && !lunar.is_leap_month
            }
        };

        // Selection is keyed in the active mode's unit and only meaningful
        // on in-period cells. A leftover selection from the other mode never
        // matches.
        let day_in_mode = match mode {
            MainMode::SolarLed => solar.day(),
            MainMode::LunarLed => lunar.day,
        };
        let is_selected = is_current_period
            && selected.is_some_and(|s| {
                s.mode == mode && s.year == year && s.month == month && s.day == day_in_mode
            });

        Ok(CalendarDay {
            solar,
            lunar,
            is_current_period,
            is_weekend_saturday: weekday == Weekday::Sat,
            is_weekend_sunday: weekday == Weekday::Sun,
            is_today: solar == today,
            is_selected,
            holiday_name: self.holidays.holiday(solar).map(str::to_string),
        })
    }
}
