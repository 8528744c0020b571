use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Bounds of a single period: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            Some((first, last_day_of_month(first.year(), first.month())?))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period expression into inclusive date bounds.
///
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `A:B` where A and B are any of the above; spans from the start of A
///   to the end of B
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    let (start, end) = match p.split_once(':') {
        Some((a, b)) => {
            let (start, _) = period_bounds(a).ok_or_else(invalid)?;
            let (_, end) = period_bounds(b).ok_or_else(invalid)?;
            (start, end)
        }
        None => period_bounds(p).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }

    Ok((start, end))
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = date
        .with_day(1)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let last = last_day_of_month(date.year(), date.month())
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok((first, last))
}
