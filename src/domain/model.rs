use crate::utils::error::{CalendarError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Gregorian calendar day. Always denotes a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolarDate(NaiveDate);

impl SolarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidSolarDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn to_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SolarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A Vietnamese lunar calendar day. Whether the (year, month, leap) triple
/// actually exists is decided by the converter, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { " nhuận" } else { "" };
        write!(f, "{}/{}{}/{} ÂL", self.day, self.month, leap, self.year)
    }
}

/// Which calendar defines the browsed month unit and the selection
/// coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainMode {
    SolarLed,
    LunarLed,
}

impl MainMode {
    pub fn toggled(self) -> Self {
        match self {
            MainMode::SolarLed => MainMode::LunarLed,
            MainMode::LunarLed => MainMode::SolarLed,
        }
    }
}

/// A selection expressed in the active mode's unit. A lunar-mode selection
/// is keyed by lunar day, a solar-mode selection by solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub mode: MainMode,
}

/// One grid cell, annotated with both calendar representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub solar: SolarDate,
    pub lunar: LunarDate,
    pub is_current_period: bool,
    pub is_weekend_saturday: bool,
    pub is_weekend_sunday: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub holiday_name: Option<String>,
}

/// The four IVF milestone dates derived from an estimated birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub estimated_birth: SolarDate,
    pub embryo_transfer: SolarDate,
    pub egg_retrieval: SolarDate,
    pub stimulation_start: SolarDate,
}

/// The controller-owned view state. Immutable; navigation produces a new
/// value through `core::state::reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub year: i32,
    pub month: u32,
    pub mode: MainMode,
    pub selected: Option<SelectedDate>,
}

impl ViewState {
    pub fn new(year: i32, month: u32, mode: MainMode) -> Self {
        Self {
            year,
            month,
            mode,
            selected: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    PrevMonth,
    NextMonth,
    ToggleMode,
    /// Select a day in the currently browsed month, in the active mode's unit.
    Select { day: u32 },
    ClearSelection,
}
