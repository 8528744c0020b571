use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> AppResult<()> {
    println!();

    let db_path = pool.path().unwrap_or(":memory:");

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM time_entries WHERE clock_out IS NULL",
        [],
        |row| row.get(0),
    )?;
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT employee_id) FROM time_entries", [], |row| {
            row.get(0)
        })?;
    let profiles: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;

    println!("{}• Time entries:{} {}{}{}", CYAN, RESET, GREEN, entries, RESET);
    println!("{}• Open sessions:{} {}", CYAN, RESET, open);
    println!("{}• Employees with entries:{} {}", CYAN, RESET, employees);
    println!("{}• Employee profiles:{} {}", CYAN, RESET, profiles);

    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM time_entries", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let dash = || format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    println!("{}• Migrations:{}", CYAN, RESET);
    for v in applied_versions(&pool.conn)? {
        println!("    {}", v);
    }

    println!();
    Ok(())
}
