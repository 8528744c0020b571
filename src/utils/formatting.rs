//! Formatting helpers for CLI output.

use crate::models::hours::Hours;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `8.50` → `8h 30m`
pub fn hours2readable(h: Hours) -> String {
    let mins = (h.hundredths() * 60 + 50) / 100;
    format!("{}h {:02}m", mins / 60, mins % 60)
}
