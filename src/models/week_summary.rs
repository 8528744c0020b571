use super::{employee_id::EmployeeId, hours::Hours};
use crate::core::calculator::week::WeekWindow;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHours {
    pub date: NaiveDate,
    pub hours: Hours,
    pub entries: usize,
}

/// Derived weekly total; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyHoursSummary {
    pub employee_id: EmployeeId,
    pub window: WeekWindow,
    pub total: Hours,
    pub entries: usize,
    pub days: Vec<DayHours>, // Sunday first, always seven rows
}
