use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        if ctx.memory {
            return Err(AppError::Other("Nothing to back up with --memory".into()));
        }
        let out = BackupLogic::backup(&ctx.cfg.database, file, *compress, *force)?;
        success(format!("Backup created: {}", out.display()));
    }

    Ok(())
}
