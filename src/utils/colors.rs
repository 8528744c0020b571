/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for placeholders ("--:--", blank, "0.00"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "0.00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Green for a running session, red for a closed one.
pub fn colorize_status(label: &str, open: bool) -> String {
    if open {
        format!("{GREEN}{label}{RESET}")
    } else {
        format!("{RED}{label}{RESET}")
    }
}
