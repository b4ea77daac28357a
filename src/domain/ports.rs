use crate::domain::model::SolarDate;

/// External collaborator: maps a solar date to an optional holiday label.
/// First match wins when a source would yield several.
pub trait HolidayLookup {
    fn holiday(&self, solar: SolarDate) -> Option<&'static str>;
}
