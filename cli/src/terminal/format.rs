use colored::*;

use crate::terminal::colors;

/// `1 creature`, `4 creatures`.
pub fn count(n: usize, singular: &str) -> String {
    match n {
        1 => format!("{n} {singular}"),
        _ => format!("{n} {singular}s"),
    }
}

pub fn tour_summary(creatures: usize, lines: usize) -> String {
    let creatures: ColoredString = count(creatures, "creature").bold().color(colors::PRIMARY);
    let lines: ColoredString = count(lines, "line").bold().color(colors::ACCENT);
    format!("Tour complete: {creatures} told {lines}")
}
