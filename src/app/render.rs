use crate::core::converter::LunarSolarConverter;
use crate::domain::model::{CalendarDay, MainMode, ScheduleResult};
use crate::utils::error::Result;
use crate::utils::format;

/// Renders a month grid as aligned text. Markers: `*` today, `#` selected,
/// `!` holiday. Lead/trail days of adjacent months are parenthesized.
pub fn render_grid(weeks: &[Vec<CalendarDay>], year: i32, month: u32, mode: MainMode) -> String {
    let mut out = String::new();
    out.push_str(&format::grid_title(year, month, mode));
    out.push('\n');
    for name in ["T2", "T3", "T4", "T5", "T6", "T7", "CN"] {
        out.push_str(&pad_cell(name));
    }
    out.push('\n');

    for week in weeks {
        for day in week {
            out.push_str(&pad_cell(&cell_text(day, mode)));
        }
        out.push('\n');
    }

    let mut holidays: Vec<String> = Vec::new();
    for day in weeks.iter().flatten() {
        if let Some(name) = &day.holiday_name {
            if day.is_current_period {
                let main = main_day(day, mode);
                holidays.push(format!(
                    "  ngày {} ({}): {}",
                    main,
                    format::secondary_caption(mode, day.solar, day.lunar),
                    name
                ));
            }
        }
    }
    if !holidays.is_empty() {
        out.push('\n');
        for line in holidays {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

/// Renders the four milestone dates with both calendar renditions, using
/// the clinic-facing Vietnamese labels.
pub fn render_schedule(result: &ScheduleResult, converter: &LunarSolarConverter) -> Result<String> {
    let pair = |date| -> Result<String> {
        let lunar = converter.solar_to_lunar(date)?;
        Ok(format::format_date_pair(date, lunar))
    };

    let mut out = String::new();
    out.push_str("🎯 Ngày sinh dự kiến\n");
    out.push_str(&format!("    {}\n\n", pair(result.estimated_birth)?));
    out.push_str("🧮 Lịch IVF ước tính\n");
    out.push_str(&format!("• Bắt đầu kích trứng: {}\n", pair(result.stimulation_start)?));
    out.push_str(&format!("• Chọc hút trứng: {}\n", pair(result.egg_retrieval)?));
    out.push_str(&format!("• Chuyển phôi: {}\n", pair(result.embryo_transfer)?));
    out.push_str(
        "\n* Ước tính dựa trên chuyển phôi 5 ngày (thai kỳ 261 ngày) và thời gian trung bình của quy trình IVF.\n",
    );
    Ok(out)
}

fn main_day(day: &CalendarDay, mode: MainMode) -> u32 {
    match mode {
        MainMode::SolarLed => day.solar.day(),
        MainMode::LunarLed => day.lunar.day,
    }
}

fn cell_text(day: &CalendarDay, mode: MainMode) -> String {
    let main = main_day(day, mode);
    let mut text = if day.is_current_period {
        main.to_string()
    } else {
        format!("({})", main)
    };
    if day.is_today {
        text.push('*');
    }
    if day.is_selected {
        text.push('#');
    }
    if day.holiday_name.is_some() && day.is_current_period {
        text.push('!');
    }
    text
}

fn pad_cell(text: &str) -> String {
    format!("{:>6}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticHolidayTable;
    use crate::core::grid::CalendarGridBuilder;
    use crate::core::schedule::{BirthRef, ScheduleCalculator};
    use crate::domain::model::SolarDate;

    fn solar(year: i32, month: u32, day: u32) -> SolarDate {
        SolarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn grid_text_has_title_and_weekday_header() {
        let builder = CalendarGridBuilder::new(StaticHolidayTable::new());
        let grid = builder
            .build_month_grid(2027, 1, MainMode::SolarLed, solar(2027, 1, 15), None)
            .unwrap();
        let text = render_grid(&grid, 2027, 1, MainMode::SolarLed);
        assert!(text.contains("Tháng 1, Năm 2027 (Dương lịch)"));
        assert!(text.contains("T2"));
        assert!(text.contains("CN"));
        assert!(text.contains("15*"));
        assert!(text.contains("Tết Dương lịch"));
    }

    #[test]
    fn schedule_text_lists_all_milestones() {
        let calculator = ScheduleCalculator::new();
        let result = calculator
            .compute_schedule(BirthRef::Solar(solar(2028, 1, 1)))
            .unwrap();
        let text = render_schedule(&result, &LunarSolarConverter::new()).unwrap();
        assert!(text.contains("Ngày sinh dự kiến"));
        assert!(text.contains("Bắt đầu kích trứng"));
        assert!(text.contains("Chọc hút trứng"));
        assert!(text.contains("Chuyển phôi"));
        assert!(text.contains("ngày 1 tháng 1, năm 2028"));
        assert!(text.contains("(Âm lịch)"));
    }
}
