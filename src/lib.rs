pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::converter::LunarSolarConverter;
pub use crate::core::grid::CalendarGridBuilder;
pub use crate::core::schedule::{BirthRef, ScheduleCalculator};
pub use crate::core::state::reduce;
pub use crate::domain::model::{
    CalendarDay, LunarDate, MainMode, ScheduleResult, SelectedDate, SolarDate, ViewAction,
    ViewState,
};
pub use crate::domain::ports::HolidayLookup;
pub use crate::utils::error::{CalendarError, Result};
