use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::hours2readable;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    let employee = ctx.employee()?;
    let clock = ctx.open_clock()?;

    match cmd {
        Commands::In => {
            let entry = clock.clock_in(&employee, ctx.now)?;
            success(format!(
                "{} clocked in on {} at {} (entry #{}).",
                employee,
                entry.date_str(),
                entry.clock_in_str(),
                entry.id
            ));
        }
        Commands::Out => {
            let entry = clock.clock_out(&employee, ctx.now)?;
            success(format!(
                "{} clocked out at {}: {} h worked ({}).",
                employee,
                entry.clock_out_str(),
                entry.hours_worked,
                hours2readable(entry.hours_worked)
            ));
        }
        _ => {}
    }

    Ok(())
}
