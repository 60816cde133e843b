use chrono::{Datelike, NaiveDate};

/// Column titles for the weekday header, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Number of days in a month, leap years included. Months are zero-based
/// (0 = January .. 11 = December), matching the calendar view state.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of(year, month);
    let (next_year, next_month) = if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    };
    first_of(next_year, next_month)
        .signed_duration_since(first)
        .num_days() as u32
}

/// Weekday index of day 1 of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    first_of(year, month).weekday().num_days_from_sunday()
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_february_leap() {
        assert_eq!(days_in_month(2024, 1), 29);
    }

    #[test]
    fn test_days_in_month_february_non_leap() {
        assert_eq!(days_in_month(2023, 1), 28);
    }

    #[test]
    fn test_days_in_month_april() {
        assert_eq!(days_in_month(2024, 3), 30);
    }

    #[test]
    fn test_days_in_month_january() {
        assert_eq!(days_in_month(2024, 0), 31);
    }

    #[test]
    fn test_days_in_month_december() {
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn test_days_in_month_century_rules() {
        // 2000 was a leap year, 1900 was not
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn test_first_weekday_january_2024_is_monday() {
        assert_eq!(first_weekday_of_month(2024, 0), 1);
    }

    #[test]
    fn test_first_weekday_june_2025_is_sunday() {
        assert_eq!(first_weekday_of_month(2025, 5), 0);
    }

    #[test]
    fn test_first_weekday_august_2025_is_friday() {
        assert_eq!(first_weekday_of_month(2025, 7), 5);
    }

    #[test]
    fn test_month_name_known_values() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(5), "June");
        assert_eq!(month_name(11), "December");
    }

    #[test]
    fn test_month_name_unknown() {
        assert_eq!(month_name(12), "Unknown");
        assert_eq!(month_name(99), "Unknown");
    }

    #[test]
    fn test_weekday_names_start_and_end() {
        assert_eq!(WEEKDAY_NAMES[0], "Sunday");
        assert_eq!(WEEKDAY_NAMES[6], "Saturday");
    }
}
