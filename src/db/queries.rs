use crate::errors::{AppError, AppResult};
use crate::models::employee_id::EmployeeId;
use crate::models::hours::Hours;
use crate::models::time_entry::{NewTimeEntry, TimeEntry};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, employee_id, date, clock_in, clock_out, hours_hundredths
                            FROM time_entries";

pub(crate) fn fmt_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub(crate) fn fmt_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn conversion_err(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_ts(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_err(idx, AppError::InvalidTimestamp(raw.to_string())))
}

pub(crate) fn parse_date(idx: usize, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| conversion_err(idx, AppError::InvalidDate(raw.to_string())))
}

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let employee_raw: String = row.get("employee_id")?;
    let employee_id = EmployeeId::parse(&employee_raw).map_err(|e| conversion_err(1, e))?;

    let date_raw: String = row.get("date")?;
    let clock_in_raw: String = row.get("clock_in")?;
    let clock_out_raw: Option<String> = row.get("clock_out")?;

    Ok(TimeEntry {
        id: row.get("id")?,
        employee_id,
        date: parse_date(2, &date_raw)?,
        clock_in: parse_ts(3, &clock_in_raw)?,
        clock_out: clock_out_raw.as_deref().map(|s| parse_ts(4, s)).transpose()?,
        hours_worked: Hours::from_hundredths(row.get("hours_hundredths")?),
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry and return its id.
///
/// The partial unique index on open sessions turns a concurrent second
/// clock-in into `AlreadyClockedIn`.
pub fn insert_entry(conn: &Connection, entry: &NewTimeEntry) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO time_entries (employee_id, date, clock_in, clock_out, hours_hundredths, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.employee_id.as_str(),
            fmt_date(&entry.date),
            fmt_ts(&entry.clock_in),
            entry.clock_out.as_ref().map(fmt_ts),
            entry.hours_worked.hundredths(),
            Local::now().to_rfc3339(),
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation && entry.clock_out.is_none() =>
        {
            Err(AppError::AlreadyClockedIn {
                employee: entry.employee_id.to_string(),
                date: entry.date,
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<TimeEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_entry_row).optional()?)
}

pub fn load_open_entry(conn: &Connection, employee: &EmployeeId) -> AppResult<Option<TimeEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY} WHERE employee_id = ?1 AND clock_out IS NULL
         ORDER BY clock_in DESC LIMIT 1"
    ))?;
    Ok(stmt
        .query_row([employee.as_str()], map_entry_row)
        .optional()?)
}

pub fn load_latest_for_date(
    conn: &Connection,
    employee: &EmployeeId,
    date: &NaiveDate,
) -> AppResult<Option<TimeEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY} WHERE employee_id = ?1 AND date = ?2
         ORDER BY clock_in DESC, id DESC LIMIT 1"
    ))?;
    Ok(stmt
        .query_row(params![employee.as_str(), fmt_date(date)], map_entry_row)
        .optional()?)
}

pub fn load_entries_for_employee(
    conn: &Connection,
    employee: &EmployeeId,
) -> AppResult<Vec<TimeEntry>> {
    collect(
        conn,
        &format!("{SELECT_ENTRY} WHERE employee_id = ?1 ORDER BY date ASC, clock_in ASC, id ASC"),
        [employee.as_str()],
    )
}

/// Dates are stored as "YYYY-MM-DD", so text comparison is date comparison.
pub fn load_entries_in_range(
    conn: &Connection,
    employee: &EmployeeId,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    collect(
        conn,
        &format!(
            "{SELECT_ENTRY} WHERE employee_id = ?1 AND date >= ?2 AND date <= ?3
             ORDER BY date ASC, clock_in ASC, id ASC"
        ),
        params![employee.as_str(), fmt_date(start), fmt_date(end)],
    )
}

/// Rewrite every mutable column of an entry; returns affected rows.
pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<usize> {
    let res = conn.execute(
        "UPDATE time_entries
         SET date = ?1, clock_in = ?2, clock_out = ?3, hours_hundredths = ?4
         WHERE id = ?5",
        params![
            fmt_date(&entry.date),
            fmt_ts(&entry.clock_in),
            entry.clock_out.as_ref().map(fmt_ts),
            entry.hours_worked.hundredths(),
            entry.id,
        ],
    );

    match res {
        Ok(n) => Ok(n),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation && entry.is_open() =>
        {
            Err(AppError::AlreadyClockedIn {
                employee: entry.employee_id.to_string(),
                date: entry.date,
            })
        }
        Err(e) => Err(e.into()),
    }
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?)
}
