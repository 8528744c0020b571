use crate::cli::context::RunContext;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(ctx: &RunContext) -> AppResult<()> {
    if ctx.memory {
        info("In-memory store selected: nothing to initialize.");
        return Ok(());
    }

    let cfg = Config::init_all(&ctx.cfg.database, !ctx.test)?;

    println!("⚙️  Initializing rTimeclock…");
    if !ctx.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    let applied = init_db(&pool.conn)?;

    success(format!(
        "Database initialized at {} ({} migration(s) applied)",
        cfg.database, applied
    ));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
