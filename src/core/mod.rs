pub mod converter;
pub mod grid;
pub mod schedule;
pub mod state;

pub use crate::domain::model::{
    CalendarDay, LunarDate, MainMode, ScheduleResult, SelectedDate, SolarDate, ViewAction,
    ViewState,
};
pub use crate::domain::ports::HolidayLookup;
pub use crate::utils::error::Result;
