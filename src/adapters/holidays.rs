use crate::core::converter::LunarSolarConverter;
use crate::domain::model::SolarDate;
use crate::domain::ports::HolidayLookup;

/// Vietnamese holidays fixed to a lunar (month, day).
const LUNAR_HOLIDAYS: &[((u32, u32), &str)] = &[
    ((1, 1), "Tết Nguyên Đán"),
    ((1, 2), "Tết Nguyên Đán"),
    ((1, 3), "Tết Nguyên Đán"),
    ((2, 10), "Lễ hội Hoa Ban"),
    ((3, 10), "Giỗ tổ Hùng Vương"),
    ((4, 15), "Lễ Phật Đản"),
    ((5, 5), "Tết Đoan Ngọ"),
    ((6, 15), "Lễ Trung Nguyên"),
    ((7, 15), "Lễ Vu Lan"),
    ((8, 15), "Tết Trung Thu"),
    ((9, 9), "Tết Trùng Cửu"),
    ((10, 15), "Tết Dợn"),
    ((11, 15), "Tết Ông Công Ông Táo"),
    ((12, 23), "Ông Táo chầu trời"),
    ((12, 30), "Tất Niên"),
];

/// National holidays fixed to a solar (month, day).
const SOLAR_HOLIDAYS: &[((u32, u32), &str)] = &[
    ((1, 1), "Tết Dương lịch"),
    ((4, 30), "Giải phóng miền Nam"),
    ((5, 1), "Quốc tế Lao động"),
    ((9, 2), "Quốc khánh"),
];

/// Static-table holiday source, the single source of truth for holiday
/// labels. Lunar-keyed entries are checked before solar-keyed ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHolidayTable {
    converter: LunarSolarConverter,
}

impl StaticHolidayTable {
    pub fn new() -> Self {
        Self {
            converter: LunarSolarConverter::new(),
        }
    }
}

impl HolidayLookup for StaticHolidayTable {
    fn holiday(&self, solar: SolarDate) -> Option<&'static str> {
        if let Ok(lunar) = self.converter.solar_to_lunar(solar) {
            // Lunar holidays fall in ordinary months only; a leap month
            // repeats the numbering but not the festival.
            if !lunar.is_leap_month {
                if let Some(name) = lookup(LUNAR_HOLIDAYS, lunar.month, lunar.day) {
                    return Some(name);
                }
            }
        }
        lookup(SOLAR_HOLIDAYS, solar.month(), solar.day())
    }
}

fn lookup(table: &[((u32, u32), &'static str)], month: u32, day: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|((m, d), _)| *m == month && *d == day)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(year: i32, month: u32, day: u32) -> SolarDate {
        SolarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn mid_autumn_matches_lunar_key() {
        let table = StaticHolidayTable::new();
        assert_eq!(table.holiday(solar(2024, 9, 17)), Some("Tết Trung Thu"));
    }

    #[test]
    fn tet_holiday_spans_three_days() {
        let table = StaticHolidayTable::new();
        // Tet 2025 fell on January 29.
        assert_eq!(table.holiday(solar(2025, 1, 29)), Some("Tết Nguyên Đán"));
        assert_eq!(table.holiday(solar(2025, 1, 30)), Some("Tết Nguyên Đán"));
        assert_eq!(table.holiday(solar(2025, 1, 31)), Some("Tết Nguyên Đán"));
        assert_eq!(table.holiday(solar(2025, 2, 1)), None);
    }

    #[test]
    fn solar_keyed_national_holidays() {
        let table = StaticHolidayTable::new();
        assert_eq!(table.holiday(solar(2025, 9, 2)), Some("Quốc khánh"));
        assert_eq!(table.holiday(solar(2026, 1, 1)), Some("Tết Dương lịch"));
        assert_eq!(table.holiday(solar(2026, 4, 30)), Some("Giải phóng miền Nam"));
    }

    #[test]
    fn ordinary_day_has_no_label() {
        let table = StaticHolidayTable::new();
        // Six days after Tet 2025: lunar 7/1, no entry under either key.
        assert_eq!(table.holiday(solar(2025, 2, 4)), None);
    }
}
