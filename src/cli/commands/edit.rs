use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::core::admin::EntryEdit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_optional_timestamp;

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        start,
        end,
        reopen,
    } = cmd
    {
        let edit = EntryEdit {
            date: date.as_deref().map(parse_date_arg).transpose()?,
            clock_in: parse_optional_timestamp(start.as_ref())?,
            clock_out: if *reopen {
                Some(None)
            } else {
                parse_optional_timestamp(end.as_ref())?.map(Some)
            },
        };

        if edit.is_empty() {
            return Err(AppError::Other(
                "Nothing to do: specify --date, --in, --out or --reopen.".into(),
            ));
        }

        let clock = ctx.open_clock()?;
        let updated = clock.edit_entry(*id, &edit)?;

        success(format!(
            "Entry #{} updated: {} {} → {} ({} h).",
            updated.id,
            updated.date_str(),
            updated.clock_in_str(),
            updated.clock_out_str(),
            updated.hours_worked
        ));
    }

    Ok(())
}
