use crate::cli::context::RunContext;
use crate::cli::parser::{Commands, EmployeeCommand};
use crate::core::employees::EmployeeLogic;
use crate::errors::AppResult;
use crate::models::employee::{Employee, EmployeePatch};
use crate::models::employee_id::EmployeeId;
use crate::store::Store;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_date_arg;
use crate::utils::table::Table;

fn audit(store: &dyn Store, target: &str, message: &str) {
    if let Err(e) = store.record("employee", target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn print_profile(e: &Employee) {
    header(format!("Employee {}", e.id));
    let start = e.start_date.map(|d| d.to_string()).unwrap_or_default();
    println!("Name       : {}", e.name);
    println!("Email      : {}", colorize_optional(&e.email));
    println!("Department : {}", colorize_optional(&e.department));
    println!("Position   : {}", colorize_optional(&e.position));
    println!("Start date : {}", colorize_optional(&start));
}

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let store = ctx.open_store()?;

    match action {
        EmployeeCommand::Add {
            id,
            name,
            email,
            department,
            position,
            start_date,
        } => {
            let employee = Employee {
                id: EmployeeId::parse(id)?,
                name: name.clone(),
                email: email.clone(),
                department: department.clone(),
                position: position.clone(),
                start_date: start_date.as_deref().map(parse_date_arg).transpose()?,
            };
            EmployeeLogic::add(store.as_ref(), &employee)?;
            audit(store.as_ref(), employee.id.as_str(), "Profile created");
            success(format!("Employee {} ({}) added.", employee.id, employee.name));
        }

        EmployeeCommand::Show { id } => {
            let id = match id {
                Some(raw) => EmployeeId::parse(raw)?,
                None => ctx.employee()?,
            };
            print_profile(&EmployeeLogic::show(store.as_ref(), &id)?);
        }

        EmployeeCommand::List => {
            let all = EmployeeLogic::list(store.as_ref())?;
            if all.is_empty() {
                info("No employee profiles found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "NAME", "DEPARTMENT", "POSITION", "EMAIL"]);
            for e in &all {
                table.add_row(vec![
                    e.id.to_string(),
                    e.name.clone(),
                    e.department.clone(),
                    e.position.clone(),
                    e.email.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        EmployeeCommand::Update {
            id,
            name,
            email,
            department,
            position,
            start_date,
        } => {
            let id = EmployeeId::parse(id)?;
            let patch = EmployeePatch {
                name: name.clone(),
                email: email.clone(),
                department: department.clone(),
                position: position.clone(),
                start_date: start_date.as_deref().map(parse_date_arg).transpose()?,
            };
            let updated = EmployeeLogic::update(store.as_ref(), &id, &patch)?;
            audit(store.as_ref(), updated.id.as_str(), "Profile updated");
            success(format!("Employee {} updated.", updated.id));
        }
    }

    Ok(())
}
