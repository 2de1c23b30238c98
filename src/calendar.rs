use crate::models::{DayCell, MonthGrid};
use crate::stats::{day_color, group_by_date};
use crate::store::StoreData;
use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// December wraps to January of the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// January wraps to December of the previous year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Builds the Sunday-start grid for the month containing `first_day`
/// (callers pass the first of the month). Day cells carry record counts
/// and the blended background color; leading blanks pad the first week.
pub fn month_grid(first_day: NaiveDate, store: &StoreData, today: NaiveDate) -> MonthGrid {
    let check_ins_by_date = group_by_date(&store.check_ins);
    let planned_by_date = group_by_date(&store.planned_check_ins);

    let mut days = Vec::new();
    let mut date = first_day;
    while date.month() == first_day.month() {
        let key = date.format("%Y-%m-%d").to_string();
        let check_ins = check_ins_by_date
            .get(key.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let planned = planned_by_date
            .get(key.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        days.push(DayCell {
            day: date.day(),
            check_ins: check_ins.len(),
            planned: planned.len(),
            color: day_color(check_ins, planned, |id| store.location_color(id).to_string()),
            is_today: date == today,
            date: key,
        });

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let year = first_day.year();
    let month = first_day.month();
    let (prev_year, prev_month_no) = prev_month(year, month);
    let (next_year, next_month_no) = next_month(year, month);

    MonthGrid {
        year,
        month,
        month_name: MONTH_NAMES[month as usize - 1].to_string(),
        leading_blanks: first_day.weekday().num_days_from_sunday(),
        days,
        prev_year,
        prev_month: prev_month_no,
        next_year,
        next_month: next_month_no,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckIn, Location};

    fn first_of(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 6), (2024, 7));
        assert_eq!(prev_month(2024, 6), (2024, 5));
    }

    #[test]
    fn grid_covers_the_whole_month_with_leading_blanks() {
        let store = StoreData::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        // June 2024 starts on a Saturday and has 30 days.
        let grid = month_grid(first_of(2024, 6), &store, today);
        assert_eq!(grid.month_name, "June");
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.days[0].date, "2024-06-01");
        assert_eq!(grid.days[29].date, "2024-06-30");
        assert!(grid.days[14].is_today);
        assert_eq!(grid.prev_month, 5);
        assert_eq!(grid.next_month, 7);
    }

    #[test]
    fn leap_february_has_29_cells() {
        let store = StoreData::default();
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let grid = month_grid(first_of(2024, 2), &store, today);
        assert_eq!(grid.days.len(), 29);
    }

    #[test]
    fn day_cells_carry_counts_and_location_colors() {
        let mut store = StoreData::default();
        store.locations.push(Location {
            id: "L1".into(),
            name: "Store A".into(),
            color: "#EF4444".into(),
        });
        store.check_ins.push(CheckIn {
            id: "1".into(),
            date: "2024-06-03".into(),
            location_id: "L1".into(),
            observations: String::new(),
            checklist_items: Vec::new(),
        });

        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let grid = month_grid(first_of(2024, 6), &store, today);

        let cell = &grid.days[2];
        assert_eq!(cell.date, "2024-06-03");
        assert_eq!(cell.check_ins, 1);
        assert_eq!(cell.planned, 0);
        assert_eq!(cell.color, "#EF4444");

        // Untouched days fall back to the default color.
        assert_eq!(grid.days[0].color, crate::models::DEFAULT_COLOR);
    }
}
