pub mod employee;
pub mod employee_id;
pub mod hours;
pub mod time_entry;
pub mod week_summary;
