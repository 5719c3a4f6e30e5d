use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::CalendarMonth;
use crate::error::{Error, Result};
use crate::model::DateKey;

/// Parses a day given on the command line relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`/`tod`, `yesterday`/`yest`,
/// `tomorrow`/`tom` and offsets like `+3d` or `-1d`.
pub fn parse_date_key(input: &str, today: NaiveDate) -> Result<DateKey> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(DateKey::new(today)),
        "yesterday" | "yest" => return Ok(DateKey::new(today - Duration::days(1))),
        "tomorrow" | "tom" => return Ok(DateKey::new(today + Duration::days(1))),
        _ => {}
    }

    if let Some(days) = parse_day_offset(input) {
        return Duration::try_days(days)
            .and_then(|offset| today.checked_add_signed(offset))
            .map(DateKey::new)
            .ok_or_else(|| Error::InvalidDate(input.to_string()));
    }

    input.parse()
}

/// `+Nd` / `-Nd`
fn parse_day_offset(input: &str) -> Option<i64> {
    let sign = match input.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let count: i64 = input[1..].strip_suffix('d')?.parse().ok()?;
    count.checked_mul(sign)
}

/// Parses `YYYY-MM`, or `this`/`prev`/`next` relative to `today`.
pub fn parse_month(input: &str, today: NaiveDate) -> Result<CalendarMonth> {
    let input = input.trim();
    let invalid = || Error::InvalidMonth(input.to_string());

    let mut month = CalendarMonth::from_ym(today.year(), today.month()).ok_or_else(invalid)?;
    match input.to_lowercase().as_str() {
        "this" | "" => return Ok(month),
        "prev" | "last" => {
            month.change_month(-1);
            return Ok(month);
        }
        "next" => {
            month.change_month(1);
            return Ok(month);
        }
        _ => {}
    }

    let (year, month_num) = input.split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month_num.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_num: u32 = month_num.parse().map_err(|_| invalid())?;
    CalendarMonth::from_ym(year, month_num).ok_or_else(invalid)
}
