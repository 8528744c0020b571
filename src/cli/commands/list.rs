use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::core::aggregate::sum_hours;
use crate::core::calculator::duration::calendar_date;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::{month_bounds, parse_period};
use crate::utils::formatting::bold;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if let Commands::List { period, recent } = cmd {
        let employee = ctx.employee()?;
        let clock = ctx.open_clock()?;

        let (title, entries) = match (recent, period) {
            (Some(n), _) => {
                let n = n.unwrap_or(ctx.cfg.recent_limit);
                (
                    format!("Last {} entries of {}", n, employee),
                    clock.recent_entries(&employee, n)?,
                )
            }
            (None, Some(p)) => {
                let (start, end) = parse_period(p)?;
                (
                    format!("Entries of {} from {} to {}", employee, start, end),
                    clock.entries_in_range(&employee, start, end)?,
                )
            }
            (None, None) => {
                let (start, end) = month_bounds(calendar_date(ctx.now))?;
                (
                    format!("Entries of {} from {} to {}", employee, start, end),
                    clock.entries_in_range(&employee, start, end)?,
                )
            }
        };

        if entries.is_empty() {
            info("No time entries found.");
            return Ok(());
        }

        header(title);

        let mut table = Table::new(&["ID", "DATE", "IN", "OUT", "HOURS"]);
        for e in &entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date_str(),
                e.clock_in_str(),
                e.clock_out_str(),
                e.hours_worked.to_string(),
            ]);
        }

        // widths are computed on plain text; color afterwards
        for line in table.render().lines() {
            println!("{}", line.replace("--:--", &colorize_optional("--:--")));
        }

        println!("\nTotal: {}", bold(&format!("{} h", sum_hours(&entries))));
    }

    Ok(())
}
