use crate::domain::model::{SelectedDate, ViewAction, ViewState};

/// Pure reducer over the controller-owned view state. Month navigation and
/// mode toggling always clear the selection, so a stale cross-mode
/// selection can never reach the grid builder.
pub fn reduce(state: ViewState, action: ViewAction) -> ViewState {
    match action {
        ViewAction::PrevMonth => {
            let (year, month) = if state.month == 1 {
                (state.year - 1, 12)
            } else {
                (state.year, state.month - 1)
            };
            ViewState {
                year,
                month,
                selected: None,
                ..state
            }
        }
        ViewAction::NextMonth => {
            let (year, month) = if state.month == 12 {
                (state.year + 1, 1)
            } else {
                (state.year, state.month + 1)
            };
            ViewState {
                year,
                month,
                selected: None,
                ..state
            }
        }
        ViewAction::ToggleMode => ViewState {
            mode: state.mode.toggled(),
            selected: None,
            ..state
        },
        ViewAction::Select { day } => ViewState {
            selected: Some(SelectedDate {
                year: state.year,
                month: state.month,
                day,
                mode: state.mode,
            }),
            ..state
        },
        ViewAction::ClearSelection => ViewState {
            selected: None,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MainMode;

    #[test]
    fn navigation_wraps_year_boundaries() {
        let state = ViewState::new(2027, 1, MainMode::LunarLed);
        let prev = reduce(state, ViewAction::PrevMonth);
        assert_eq!((prev.year, prev.month), (2026, 12));

        let state = ViewState::new(2027, 12, MainMode::LunarLed);
        let next = reduce(state, ViewAction::NextMonth);
        assert_eq!((next.year, next.month), (2028, 1));
    }

    #[test]
    fn month_change_clears_selection() {
        let mut state = ViewState::new(2027, 1, MainMode::SolarLed);
        state = reduce(state, ViewAction::Select { day: 15 });
        assert!(state.selected.is_some());

        let next = reduce(state, ViewAction::NextMonth);
        assert!(next.selected.is_none());
        let prev = reduce(state, ViewAction::PrevMonth);
        assert!(prev.selected.is_none());
    }

    #[test]
    fn mode_toggle_clears_selection_even_if_coordinate_would_resolve() {
        let mut state = ViewState::new(2027, 1, MainMode::SolarLed);
        state = reduce(state, ViewAction::Select { day: 1 });

        let toggled = reduce(state, ViewAction::ToggleMode);
        assert_eq!(toggled.mode, MainMode::LunarLed);
        assert!(toggled.selected.is_none());
    }

    #[test]
    fn selection_carries_current_mode_and_coordinate() {
        let state = ViewState::new(2027, 3, MainMode::LunarLed);
        let selected = reduce(state, ViewAction::Select { day: 10 }).selected.unwrap();
        assert_eq!(selected.year, 2027);
        assert_eq!(selected.month, 3);
        assert_eq!(selected.day, 10);
        assert_eq!(selected.mode, MainMode::LunarLed);
    }

    #[test]
    fn clear_selection_is_idempotent() {
        let state = ViewState::new(2027, 3, MainMode::SolarLed);
        let cleared = reduce(state, ViewAction::ClearSelection);
        assert_eq!(cleared, reduce(cleared, ViewAction::ClearSelection));
    }
}
