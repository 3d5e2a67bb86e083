/// ANSI color helper utilities for terminal output.
use crate::models::RecordKind;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check-ins in green, check-outs in red.
pub fn colorize_kind(kind: RecordKind) -> String {
    let colour = match kind {
        RecordKind::CheckIn => Colour::Green,
        RecordKind::CheckOut => Colour::Red,
    };
    colour.paint(kind.label()).to_string()
}

/// Greys out empty values so blank actors stay visible in tables.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}(blank){RESET}")
    } else {
        value.to_string()
    }
}
