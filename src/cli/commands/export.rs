use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::store::TimeEntryStore;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_period;

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let employee = ctx.employee()?;
        let clock = ctx.open_clock()?;

        let entries = match range {
            Some(r) => {
                let (start, end) = parse_period(r)?;
                clock.entries_in_range(&employee, start, end)?
            }
            None => clock.store().list_by_employee(&employee)?,
        };

        let written = ExportLogic::export(&entries, *format, file, *force)?;

        if let Err(e) = clock.store().record(
            "export",
            file,
            &format!("{} {} row(s) of {}", format.as_str(), written, employee),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success(format!(
            "Exported {} entr{} to {} ({}).",
            written,
            if written == 1 { "y" } else { "ies" },
            file,
            format.as_str()
        ));
    }

    Ok(())
}
