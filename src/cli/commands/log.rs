use crate::cli::context::RunContext;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, ctx: &RunContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if ctx.memory {
            return Err(AppError::Other(
                "The internal log lives in the database; not available with --memory".into(),
            ));
        }
        let pool = DbPool::new(&ctx.cfg.database)?;
        LogLogic::print_log(&pool.conn)?;
    }

    Ok(())
}
