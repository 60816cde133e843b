use chrono::{Datelike, Local};
use std::collections::BTreeSet;
use std::fmt;

/// The eight bookable hour ranges, in display order. A static sequence,
/// not derived from the selected day.
pub const HOUR_RANGES: [&str; 8] = [
    "09AM - 10AM",
    "10AM - 11AM",
    "11AM - 12PM",
    "12PM - 1PM",
    "1PM - 2PM",
    "2PM - 3PM",
    "3PM - 4PM",
    "4PM - 5PM",
];

/// Slots that can never be booked. Toggling one is a silent no-op.
pub const UNAVAILABLE_SLOTS: [&str; 3] = ["1-09AM - 10AM", "3-11AM - 12PM", "5-2PM - 3PM"];

/// Key for one (day-of-month, hour-range) pair of the displayed month.
/// Day numbers repeat across months, so a key selected in one month reads
/// as selected wherever that day number appears again.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(day: u32, hour_range: &str) -> Self {
        SlotId(format!("{day}-{hour_range}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn is_unavailable(slot: &SlotId) -> bool {
    UNAVAILABLE_SLOTS.contains(&slot.as_str())
}

/// State of the calendar widget. `day` and `hour` keep their initial values
/// for the lifetime of the state; only navigation and selection are reduced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub year: i32,
    /// Zero-based month, always in [0, 11].
    pub month: u32,
    pub day: u32,
    pub hour: String,
    pub selected: BTreeSet<SlotId>,
}

impl ViewState {
    pub fn new(year: i32, month: u32) -> Self {
        ViewState {
            year,
            month,
            day: 1,
            hour: HOUR_RANGES[0].to_string(),
            selected: BTreeSet::new(),
        }
    }

    /// Fresh state showing the current month with nothing selected.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        ViewState::new(today.year(), today.month0())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    PrevYear,
    NextYear,
    PrevMonth,
    NextMonth,
    ToggleSlot(SlotId),
}

/// Pure state transition. Years are unbounded in both directions; month
/// steps wrap and roll the year so `month` stays in [0, 11].
pub fn reduce(state: &ViewState, action: &Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::PrevYear => next.year -= 1,
        Action::NextYear => next.year += 1,
        Action::PrevMonth => {
            if next.month == 0 {
                next.month = 11;
                next.year -= 1;
            } else {
                next.month -= 1;
            }
        }
        Action::NextMonth => {
            if next.month == 11 {
                next.month = 0;
                next.year += 1;
            } else {
                next.month += 1;
            }
        }
        Action::ToggleSlot(slot) => {
            if !is_unavailable(slot) && !next.selected.remove(slot) {
                next.selected.insert(slot.clone());
            }
        }
    }
    next
}
