//! Versioned schema migrations.
//!
//! Every migration is applied once inside its own transaction and marked in
//! the `log` table with operation `migration_applied`.

use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_time_entries",
        description: "Created time_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id       TEXT NOT NULL,
            date              TEXT NOT NULL,
            clock_in          TEXT NOT NULL,
            clock_out         TEXT,
            hours_hundredths  INTEGER NOT NULL DEFAULT 0 CHECK(hours_hundredths >= 0),
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_employee_date ON time_entries(employee_id, date);
        "#,
    },
    Migration {
        version: "20250301_0002_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL DEFAULT '',
            department  TEXT NOT NULL DEFAULT '',
            position    TEXT NOT NULL DEFAULT '',
            start_date  TEXT,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250412_0003_one_open_session_index",
        description: "At most one open session per employee",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_one_open
            ON time_entries(employee_id)
            WHERE clock_out IS NULL;
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, returning how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
