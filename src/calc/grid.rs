use crate::calc::month::{days_in_month, first_weekday_of_month};

/// One cell of the month grid. Leading and trailing cells carry the day
/// number of the adjacent month shown in that position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayCell {
    PrevMonth(u32),
    Current(u32),
    NextMonth(u32),
}

impl DayCell {
    pub fn day(&self) -> u32 {
        match *self {
            DayCell::PrevMonth(d) | DayCell::Current(d) | DayCell::NextMonth(d) => d,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, DayCell::Current(_))
    }
}

/// Builds the week rows for a month. Every row holds exactly 7 cells:
/// leading cells are the trailing days of the previous month, then days
/// 1..=days_in_month, then next-month padding on the closing row.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<DayCell>> {
    let days = days_in_month(year, month);
    let first_dow = first_weekday_of_month(year, month);
    let (prev_year, prev_month) = if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    };
    let days_in_prev = days_in_month(prev_year, prev_month);

    let mut weeks = Vec::new();
    let mut row: Vec<DayCell> = Vec::with_capacity(7);

    for i in 0..first_dow {
        row.push(DayCell::PrevMonth(days_in_prev - first_dow + i + 1));
    }

    for day in 1..=days {
        row.push(DayCell::Current(day));
        if (day + first_dow) % 7 == 0 || day == days {
            if day == days {
                // The pad counter restarts at 1 on the closing row.
                let remaining = 7 - row.len() as u32;
                for pad in 1..=remaining {
                    row.push(DayCell::NextMonth(pad));
                }
            }
            weeks.push(std::mem::take(&mut row));
        }
    }

    weeks
}
