use menagerie_common::animal::Kind;
use menagerie_common::config::Config;
use menagerie_core::roster;
use menagerie_core::showcase::{Section, Tour};
use tracing::info_span;

use crate::terminal::{format, narrator::TerminalNarrator, print};

pub fn tour(sections: &[Section], kinds: &[Kind], cfg: &Config) {
    let span = info_span!("tour", sections = sections.len());
    let _guard = span.enter();

    let tour: Tour = Tour::new(roster::default_roster()).only(kinds);
    let mut narrator = TerminalNarrator::new(cfg);
    let told: usize = tour.run(sections, &mut narrator);

    print_summary(tour.creatures().len(), told, cfg);
}

fn print_summary(creatures: usize, told: usize, cfg: &Config) {
    let output: String = format::tour_summary(creatures, told);

    match cfg.verbose {
        0 => {}
        1 => {
            print::print("");
            print::print(&output);
        }
        _ => {
            print::fat_separator();
            print::centerln(&output);
        }
    }
}
