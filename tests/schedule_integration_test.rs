use amduong::{BirthRef, CalendarError, LunarDate, ScheduleCalculator, SolarDate};

fn solar(year: i32, month: u32, day: u32) -> SolarDate {
    SolarDate::new(year, month, day).unwrap()
}

#[test]
fn fixed_offsets_from_solar_birth_date() {
    let result = ScheduleCalculator::new()
        .compute_schedule(BirthRef::Solar(solar(2028, 1, 1)))
        .unwrap();

    // 261 days back, then 5, then 12.
    assert_eq!(result.estimated_birth, solar(2028, 1, 1));
    assert_eq!(result.embryo_transfer, solar(2027, 4, 15));
    assert_eq!(result.egg_retrieval, solar(2027, 4, 10));
    assert_eq!(result.stimulation_start, solar(2027, 3, 29));
}

#[test]
fn lunar_birth_date_resolves_through_the_converter() {
    // Tet 2028 falls on January 26.
    let result = ScheduleCalculator::new()
        .compute_schedule(BirthRef::Lunar(LunarDate::new(2028, 1, 1, false)))
        .unwrap();
    assert_eq!(result.estimated_birth, solar(2028, 1, 26));
}

#[test]
fn schedule_is_deterministic() {
    let calculator = ScheduleCalculator::new();
    let a = calculator
        .compute_schedule(BirthRef::Solar(solar(2030, 6, 15)))
        .unwrap();
    let b = calculator
        .compute_schedule(BirthRef::Solar(solar(2030, 6, 15)))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_lunar_birth_date_is_a_typed_failure() {
    let err = ScheduleCalculator::new()
        .compute_schedule(BirthRef::Lunar(LunarDate::new(2028, 2, 31, false)))
        .unwrap_err();
    assert!(matches!(err, CalendarError::InvalidLunarDate { .. }));
}

#[test]
fn result_serializes_for_the_presentation_layer() {
    let result = ScheduleCalculator::new()
        .compute_schedule(BirthRef::Solar(solar(2028, 1, 1)))
        .unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"embryo_transfer\":\"2027-04-15\""));
    assert!(json.contains("\"stimulation_start\":\"2027-03-29\""));
}
