use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::core::calculator::duration::calendar_date;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::parse_date_arg;
use crate::utils::formatting::{bold, hours2readable};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let employee = ctx.employee()?;
        let reference = match date {
            Some(d) => parse_date_arg(d)?,
            None => calendar_date(ctx.now),
        };

        let clock = ctx.open_clock()?;
        let summary = clock.weekly_summary(&employee, reference)?;

        header(format!(
            "Week {} → {} for {}",
            summary.window.start, summary.window.end, employee
        ));

        let mut table = Table::new(&["DAY", "DATE", "ENTRIES", "HOURS"]);
        for day in &summary.days {
            table.add_row(vec![
                day.date.format("%a").to_string(),
                day.date.to_string(),
                day.entries.to_string(),
                day.hours.to_string(),
            ]);
        }
        print!("{}", table.render());

        println!(
            "\nTotal: {} ({})",
            bold(&format!("{} h", summary.total)),
            hours2readable(summary.total)
        );
    }

    Ok(())
}
