use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid solar date: {year}-{month}-{day}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },

    #[error("Invalid lunar date: year {year} month {month} (leap: {leap}): {reason}")]
    InvalidLunarDate {
        year: i32,
        month: u32,
        leap: bool,
        reason: String,
    },

    #[error("Solar year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    #[error("Failed to resolve month bounds: {source}")]
    GridBuild {
        #[source]
        source: Box<CalendarError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
