pub mod grid;
pub mod month;
pub mod state;

pub use grid::{DayCell, month_grid};
pub use month::{WEEKDAY_NAMES, days_in_month, first_weekday_of_month, month_name};
pub use state::{
    Action, HOUR_RANGES, SlotId, UNAVAILABLE_SLOTS, ViewState, is_unavailable, reduce,
};
