use crate::errors::{AppError, AppResult};
use crate::models::hours::Hours;
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

/// Calendar date a timestamp belongs to. Session lookups, "today" and
/// weekly windows all go through here so they never drift apart.
pub fn calendar_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Timestamps are persisted with millisecond precision; anything finer is
/// dropped before an entry is built so every store returns the same value.
pub fn stored_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

/// Hours between clock-in and clock-out, rounded to two decimals.
///
/// A clock-out earlier than the clock-in is reported as `ClockSkew`; the
/// caller decides whether to reject or clamp.
pub fn hours_between(clock_in: DateTime<Utc>, clock_out: DateTime<Utc>) -> AppResult<Hours> {
    if clock_out < clock_in {
        return Err(AppError::ClockSkew {
            clock_in,
            clock_out,
        });
    }

    Ok(Hours::from_millis((clock_out - clock_in).num_milliseconds()))
}
