use crate::cli::context::RunContext;
use crate::core::calculator::duration::calendar_date;
use crate::core::calculator::week::WeekWindow;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_status;
use crate::utils::formatting::{bold, hours2readable};

/// Today's entry of the employee and the running weekly total.
pub fn handle(ctx: &RunContext) -> AppResult<()> {
    let employee = ctx.employee()?;
    let clock = ctx.open_clock()?;
    let today = calendar_date(ctx.now);

    header(format!("Status for {} on {}", employee, today));

    match clock.current_entry(&employee, ctx.now)? {
        Some(entry) if entry.is_open() => {
            let elapsed = entry.elapsed_hours(ctx.now);
            println!(
                "{}  since {} ({} h so far, {})",
                colorize_status("CLOCKED IN", true),
                entry.clock_in_str(),
                elapsed,
                hours2readable(elapsed)
            );
        }
        Some(entry) => {
            println!(
                "{}  {} → {} ({} h)",
                colorize_status("CLOCKED OUT", false),
                entry.clock_in_str(),
                entry.clock_out_str(),
                entry.hours_worked
            );
        }
        None => info("Not clocked in today."),
    }

    let window = WeekWindow::containing(today);
    let total = clock.weekly_hours(&employee, today)?;
    println!(
        "This week ({} → {}): {}",
        window.start,
        window.end,
        bold(&format!("{} h", total))
    );

    Ok(())
}
