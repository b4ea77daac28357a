use crate::domain::model::{LunarDate, MainMode, SolarDate};
use chrono::Datelike;

/// Vietnamese weekday names, indexed like the solar weekday with Sunday
/// first.
const WEEKDAY_NAMES: [&str; 7] = [
    "Chủ nhật",
    "Thứ hai",
    "Thứ ba",
    "Thứ tư",
    "Thứ năm",
    "Thứ sáu",
    "Thứ bảy",
];

pub fn weekday_name(solar: SolarDate) -> &'static str {
    WEEKDAY_NAMES[solar.to_naive().weekday().num_days_from_sunday() as usize]
}

/// `"<Weekday>, ngày <D> tháng <M>, năm <Y>"`
pub fn format_solar(solar: SolarDate) -> String {
    format!(
        "{}, ngày {} tháng {}, năm {}",
        weekday_name(solar),
        solar.day(),
        solar.month(),
        solar.year()
    )
}

/// Lunar rendition of the same day, carrying the solar weekday name and the
/// `"(Âm lịch)"` suffix.
pub fn format_lunar(solar: SolarDate, lunar: LunarDate) -> String {
    format!(
        "{}, ngày {} tháng {}, năm {} (Âm lịch)",
        weekday_name(solar),
        lunar.day,
        lunar.month,
        lunar.year
    )
}

/// Both renditions of one day, solar line first.
pub fn format_date_pair(solar: SolarDate, lunar: LunarDate) -> String {
    format!("{}\n    {}", format_solar(solar), format_lunar(solar, lunar))
}

pub fn grid_title(year: i32, month: u32, mode: MainMode) -> String {
    let calendar = match mode {
        MainMode::SolarLed => "Dương lịch",
        MainMode::LunarLed => "Âm lịch",
    };
    format!("Tháng {}, Năm {} ({})", month, year, calendar)
}

/// The small secondary caption of a grid cell: the other calendar's
/// day/month.
pub fn secondary_caption(mode: MainMode, solar: SolarDate, lunar: LunarDate) -> String {
    match mode {
        MainMode::SolarLed => format!("{}/{} (Âm)", lunar.day, lunar.month),
        MainMode::LunarLed => format!("{}/{} (Dương)", solar.day(), solar.month()),
    }
}
