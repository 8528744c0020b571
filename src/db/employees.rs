use crate::db::queries::{fmt_date, parse_date};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::employee_id::EmployeeId;
use chrono::Local;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Result, Row, params};

const SELECT_EMPLOYEE: &str =
    "SELECT id, name, email, department, position, start_date FROM employees";

fn map_employee_row(row: &Row) -> Result<Employee> {
    let id_raw: String = row.get("id")?;
    let id = EmployeeId::parse(&id_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let start_raw: Option<String> = row.get("start_date")?;

    Ok(Employee {
        id,
        name: row.get("name")?,
        email: row.get("email")?,
        department: row.get("department")?,
        position: row.get("position")?,
        start_date: start_raw.as_deref().map(|s| parse_date(5, s)).transpose()?,
    })
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    let res = conn.execute(
        "INSERT INTO employees (id, name, email, department, position, start_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            emp.id.as_str(),
            emp.name,
            emp.email,
            emp.department,
            emp.position,
            emp.start_date.as_ref().map(fmt_date),
            Local::now().to_rfc3339(),
        ],
    );

    match res {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::EmployeeExists(emp.id.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn load_employee(conn: &Connection, id: &EmployeeId) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EMPLOYEE} WHERE id = ?1"))?;
    Ok(stmt.query_row([id.as_str()], map_employee_row).optional()?)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EMPLOYEE} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_employee(conn: &Connection, emp: &Employee) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE employees
         SET name = ?1, email = ?2, department = ?3, position = ?4, start_date = ?5
         WHERE id = ?6",
        params![
            emp.name,
            emp.email,
            emp.department,
            emp.position,
            emp.start_date.as_ref().map(fmt_date),
            emp.id.as_str(),
        ],
    )?)
}
