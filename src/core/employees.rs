//! Profile management on top of an `EmployeeStore`.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::employee_id::EmployeeId;
use crate::store::EmployeeStore;

pub struct EmployeeLogic;

fn check_email(email: &str) -> AppResult<()> {
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::InvalidEmail(email.to_string())),
    }
}

impl EmployeeLogic {
    pub fn add<S: EmployeeStore + ?Sized>(store: &S, employee: &Employee) -> AppResult<()> {
        if employee.name.trim().is_empty() {
            return Err(AppError::Other("Employee name cannot be empty".into()));
        }
        if !employee.email.is_empty() {
            check_email(&employee.email)?;
        }
        store.add_employee(employee)
    }

    pub fn show<S: EmployeeStore + ?Sized>(store: &S, id: &EmployeeId) -> AppResult<Employee> {
        store
            .get_employee(id)?
            .ok_or_else(|| AppError::EmployeeNotFound(id.to_string()))
    }

    pub fn list<S: EmployeeStore + ?Sized>(store: &S) -> AppResult<Vec<Employee>> {
        store.list_employees()
    }

    pub fn update<S: EmployeeStore + ?Sized>(
        store: &S,
        id: &EmployeeId,
        patch: &EmployeePatch,
    ) -> AppResult<Employee> {
        if patch.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify at least one field to update.".into(),
            ));
        }
        if let Some(name) = &patch.name
            && name.trim().is_empty()
        {
            return Err(AppError::Other("Employee name cannot be empty".into()));
        }
        if let Some(email) = &patch.email {
            check_email(email)?;
        }
        store.update_employee(id, patch)
    }
}
