use super::employee_id::EmployeeId;
use chrono::NaiveDate;
use serde::Serialize;

/// Profile data shown on the profile page. Clock operations do not
/// require a profile to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.start_date.is_none()
    }

    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(department) = &self.department {
            employee.department = department.clone();
        }
        if let Some(position) = &self.position {
            employee.position = position.clone();
        }
        if let Some(start) = self.start_date {
            employee.start_date = Some(start);
        }
    }
}
