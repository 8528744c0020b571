//! Unified application error type.
//! Core, store, cli and utils all return AppError so callers can tell
//! business-rule violations apart from storage failures.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::ErrorCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Clock rules
    // ---------------------------
    #[error("Employee {employee} is already clocked in for {date}")]
    AlreadyClockedIn { employee: String, date: NaiveDate },

    #[error("No active clock-in found for employee {employee} on {date}")]
    NoOpenSession { employee: String, date: NaiveDate },

    #[error(
        "Employee {employee} still has an open session from {date} (entry #{id}); close it before clocking in"
    )]
    StaleOpenSession {
        employee: String,
        id: i64,
        date: NaiveDate,
    },

    #[error("Employee {employee} already has a completed session for {date}")]
    DayAlreadyRecorded { employee: String, date: NaiveDate },

    #[error("Clock-out {clock_out} is earlier than clock-in {clock_in}")]
    ClockSkew {
        clock_in: DateTime<Utc>,
        clock_out: DateTime<Utc>,
    },

    #[error("Time entry {0} not found")]
    NotFound(i64),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    // ---------------------------
    // Employees
    // ---------------------------
    #[error("Invalid employee id: {0}")]
    InvalidEmployee(String),

    #[error("Employee {0} already exists")]
    EmployeeExists(String),

    #[error("Employee {0} not found")]
    EmployeeNotFound(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for storage conditions that may succeed when retried
    /// (the database was busy or locked by another writer).
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Storage(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }

    /// True for violations of clock rules, as opposed to storage or input failures.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            AppError::AlreadyClockedIn { .. }
                | AppError::NoOpenSession { .. }
                | AppError::StaleOpenSession { .. }
                | AppError::DayAlreadyRecorded { .. }
                | AppError::ClockSkew { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
