use menagerie_common::config::Config;
use menagerie_core::showcase::{Narrator, Section};

use crate::terminal::print;

/// Tells the tour on the terminal.
pub struct TerminalNarrator {
    verbose: u8,
    sections_told: usize,
}

impl TerminalNarrator {
    pub fn new(cfg: &Config) -> Self {
        Self {
            verbose: cfg.verbose,
            sections_told: 0,
        }
    }
}

impl Narrator for TerminalNarrator {
    fn section(&mut self, section: Section) {
        if self.sections_told > 0 && self.verbose >= print::FRAMED {
            print::print("");
        }
        print::header(section.title(), self.verbose);
        self.sections_told += 1;
    }

    fn line(&mut self, text: &str) {
        print::print(text);
    }
}
