use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;

/// Verbosity at which the tour is framed by a banner and section headers.
pub const FRAMED: u8 = 2;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// A full-width line of `fill`, with `title` centred in it when given.
fn rule(fill: &str, title: Option<&str>) -> String {
    let Some(title) = title else {
        return fill.repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string();
    };

    let label: String = format!("⟦ {title} ⟧");
    let spare: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    let left: usize = spare / 2;

    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        fill.repeat(spare - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, verbose: u8) {
    if no_banner || verbose < FRAMED {
        return;
    }
    let title: String = format!("MENAGERIE v{}", env!("CARGO_PKG_VERSION"));
    print(&rule("═", Some(&title)));
}

pub fn header(title: &str, verbose: u8) {
    if verbose < FRAMED {
        return;
    }
    print(&rule("─", Some(&title.to_uppercase())));
}

pub fn fat_separator() {
    print(&rule("═", None));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
