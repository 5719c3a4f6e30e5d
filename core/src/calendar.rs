//! Month grid generation and month navigation.
//!
//! Weeks start on Sunday. A month grid is a run of leading blank cells (one
//! per weekday before the 1st) followed by one cell per day.

use chrono::{Datelike, Days, Months, NaiveDate};
use tracing::debug;

use crate::matcher::is_extra_work;
use crate::model::{DateKey, WorkLog};

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently shown, identified by a reference date.
///
/// The day-of-month is kept because navigation carries it along, so moving
/// from the 31st into a shorter month rolls over into the month after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    reference: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day_number: u32,
    pub date_key: DateKey,
    pub has_entry: bool,
    pub is_extra: bool,
    /// Logged hours, shown under the day number.
    pub hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Blank,
    Day(DayCell),
}

impl CalendarMonth {
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// First day of `year`-`month`; `None` for an invalid month.
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::new)
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.reference - Days::new(u64::from(self.reference.day0()))
    }

    /// The day before the 1st of next month, which covers February in leap
    /// years without special casing.
    pub fn days_in_month(&self) -> u32 {
        let first_of_next = self.first_day() + Months::new(1);
        (first_of_next - Days::new(1)).day()
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn date_key(&self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd(self.year(), self.month(), day)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        key.year() == self.year() && key.month() == self.month()
    }

    /// "October 2026"
    pub fn title(&self) -> String {
        self.reference.format("%B %Y").to_string()
    }

    /// Adds `delta` months to the month index, carrying the year. A day that
    /// does not exist in the target month overflows into the next one
    /// (Jan 31 + 1 lands on Mar 3, or Mar 2 in a leap year).
    pub fn change_month(&mut self, delta: i32) {
        let index = i64::from(self.year()) * 12 + i64::from(self.month0()) + i64::from(delta);
        let target = i32::try_from(index.div_euclid(12))
            .ok()
            .and_then(|year| {
                let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
                NaiveDate::from_ymd_opt(year, month, 1)
            })
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.reference.day0()))));

        match target {
            Some(reference) => self.reference = reference,
            None => debug!(delta, "month navigation out of calendar range, ignored"),
        }
    }

    fn month0(&self) -> u32 {
        self.reference.month0()
    }
}

pub fn generate_calendar_days<S: AsRef<str>>(
    month: &CalendarMonth,
    work_log: &WorkLog,
    requirements: &[S],
) -> Vec<Cell> {
    let blanks = month.first_weekday() as usize;
    let total_days = month.days_in_month();
    let mut cells = Vec::with_capacity(blanks + total_days as usize);

    cells.extend(std::iter::repeat(Cell::Blank).take(blanks));

    for (day_number, date) in (1..=total_days).zip(month.first_day().iter_days()) {
        let date_key = DateKey::new(date);
        let entry = work_log.get(&date_key);
        cells.push(Cell::Day(DayCell {
            day_number,
            date_key,
            has_entry: entry.is_some(),
            is_extra: entry.is_some_and(|e| is_extra_work(&e.extra_work, requirements)),
            hours: entry.map(|e| e.hours.clone()),
        }));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkLogEntry;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_cells(cells: &[Cell]) -> Vec<&DayCell> {
        cells
            .iter()
            .filter_map(|c| match c {
                Cell::Day(d) => Some(d),
                Cell::Blank => None,
            })
            .collect()
    }

    #[test]
    fn test_days_in_month_all_months() {
        let expected_2023 = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected_2023.iter().enumerate() {
            let month = CalendarMonth::from_ym(2023, i as u32 + 1).unwrap();
            assert_eq!(month.days_in_month(), *days, "2023-{:02}", i + 1);
        }
        assert_eq!(CalendarMonth::from_ym(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::from_ym(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::from_ym(2000, 2).unwrap().days_in_month(), 29);
    }

    #[test]
    fn test_grid_length_is_blanks_plus_days() {
        let log = WorkLog::new();
        let none: [&str; 0] = [];
        for year in [2023, 2024] {
            for m in 1..=12 {
                let month = CalendarMonth::from_ym(year, m).unwrap();
                let cells = generate_calendar_days(&month, &log, &none);
                let blanks = cells.iter().take_while(|c| **c == Cell::Blank).count();
                assert_eq!(blanks as u32, month.first_weekday());
                assert_eq!(cells.len() as u32, month.first_weekday() + month.days_in_month());
            }
        }
    }

    #[test]
    fn test_leading_blanks_match_weekday_of_first() {
        // 2024-09-01 is a Sunday, 2024-02-01 a Thursday, 2023-04-01 a Saturday.
        assert_eq!(CalendarMonth::from_ym(2024, 9).unwrap().first_weekday(), 0);
        assert_eq!(CalendarMonth::from_ym(2024, 2).unwrap().first_weekday(), 4);
        assert_eq!(CalendarMonth::from_ym(2023, 4).unwrap().first_weekday(), 6);
    }

    #[test]
    fn test_day_cells_carry_keys_and_markers() {
        let month = CalendarMonth::new(ymd(2024, 3, 17));
        let mut log = WorkLog::new();
        log.insert(
            DateKey::from_ymd(2024, 3, 4).unwrap(),
            WorkLogEntry::new("8", "Wrote weekly report"),
        );
        log.insert(
            DateKey::from_ymd(2024, 3, 5).unwrap(),
            WorkLogEntry::new("2.5", "Fixed printer"),
        );
        log.insert(DateKey::from_ymd(2024, 3, 6).unwrap(), WorkLogEntry::new("4", ""));
        // Outside the month, must not leak into the grid.
        log.insert(
            DateKey::from_ymd(2024, 4, 5).unwrap(),
            WorkLogEntry::new("1", "Fixed printer"),
        );

        let cells = generate_calendar_days(&month, &log, &["report"]);
        let days = day_cells(&cells);
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].date_key.to_string(), "2024-03-01");
        assert_eq!(days[30].date_key.to_string(), "2024-03-31");

        let report = days[3];
        assert!(report.has_entry && !report.is_extra);
        assert_eq!(report.hours.as_deref(), Some("8"));

        let printer = days[4];
        assert!(printer.has_entry && printer.is_extra);

        let no_description = days[5];
        assert!(no_description.has_entry && !no_description.is_extra);

        assert_eq!(days.iter().filter(|d| d.has_entry).count(), 3);
    }

    #[test]
    fn test_change_month_wraps_year_backwards() {
        let mut month = CalendarMonth::new(ymd(2024, 1, 15));
        month.change_month(-1);
        assert_eq!((month.year(), month.month()), (2023, 12));
        month.change_month(1);
        assert_eq!((month.year(), month.month()), (2024, 1));
    }

    #[test]
    fn test_change_month_multiple_years() {
        let mut month = CalendarMonth::new(ymd(2024, 5, 1));
        month.change_month(-29);
        assert_eq!((month.year(), month.month()), (2021, 12));
        month.change_month(25);
        assert_eq!((month.year(), month.month()), (2024, 1));
    }

    #[test]
    fn test_change_month_overflows_missing_day() {
        let mut month = CalendarMonth::new(ymd(2023, 1, 31));
        month.change_month(1);
        assert_eq!(month.reference(), ymd(2023, 3, 3));

        let mut leap = CalendarMonth::new(ymd(2024, 1, 31));
        leap.change_month(1);
        assert_eq!(leap.reference(), ymd(2024, 3, 2));

        let mut back = CalendarMonth::new(ymd(2024, 3, 31));
        back.change_month(-1);
        assert_eq!(back.reference(), ymd(2024, 3, 2));
    }

    #[test]
    fn test_title() {
        assert_eq!(CalendarMonth::from_ym(2026, 10).unwrap().title(), "October 2026");
    }
}
