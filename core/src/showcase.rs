//! # Guided Tour
//!
//! Walks a roster of creatures through three sections, in order:
//!
//! 1. **Describe**: every creature's description.
//! 2. **Chorus**: the shared sound capability, called on each element of one
//!    mixed collection. Which sound comes out is decided by each element's
//!    own kind.
//! 3. **Tricks**: the behavior unique to each kind, as fetch, climb, swim,
//!    fly. It is only reachable once the creature has been matched back to
//!    its concrete type.
//!
//! The tour never prints. It hands every line to a [`Narrator`], so the
//! terminal and the tests consume exactly the same sequence.

use std::fmt;

use menagerie_common::animal::{Creature, Kind, Speak};
use tracing::debug;

/// One part of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Describe,
    Chorus,
    Tricks,
}

impl Section {
    /// The full tour, in the order it is given.
    pub const ALL: [Section; 3] = [Section::Describe, Section::Chorus, Section::Tricks];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Describe => "meet the menagerie",
            Section::Chorus => "everyone speaks",
            Section::Tricks => "show us a trick",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Receives the tour as it happens.
pub trait Narrator {
    /// Called once before the lines of each section.
    fn section(&mut self, section: Section);

    fn line(&mut self, text: &str);
}

/// What a [`Transcript`] has seen, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Section(Section),
    Line(String),
}

/// A [`Narrator`] that keeps everything it is told.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Only the lines, with section markers dropped.
    pub fn lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Line(text) => Some(text.as_str()),
                Entry::Section(_) => None,
            })
            .collect()
    }
}

impl Narrator for Transcript {
    fn section(&mut self, section: Section) {
        self.entries.push(Entry::Section(section));
    }

    fn line(&mut self, text: &str) {
        self.entries.push(Entry::Line(text.to_string()));
    }
}

/// An ordered roster and the sections to walk it through.
pub struct Tour {
    creatures: Vec<Creature>,
}

impl Tour {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    /// Keeps only the creatures whose kind is listed. An empty list keeps all.
    pub fn only(mut self, kinds: &[Kind]) -> Self {
        if !kinds.is_empty() {
            self.creatures.retain(|creature| kinds.contains(&creature.kind()));
        }
        self
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Runs `sections` in the given order and returns how many lines were told.
    pub fn run<N: Narrator>(&self, sections: &[Section], narrator: &mut N) -> usize {
        let mut told: usize = 0;

        for &section in sections {
            debug!("Starting section '{section}' for {} creatures", self.creatures.len());
            narrator.section(section);

            for creature in self.performers(section) {
                let text: String = match section {
                    Section::Describe => creature.describe(),
                    Section::Chorus => creature.make_sound(),
                    Section::Tricks => trick(creature),
                };
                narrator.line(&text);
                told += 1;
            }
        }

        told
    }

    /// Roster order, except tricks go fetch, climb, swim, fly.
    fn performers(&self, section: Section) -> Vec<&Creature> {
        let mut performers: Vec<&Creature> = self.creatures.iter().collect();
        if section == Section::Tricks {
            performers.sort_by_key(|creature| trick_rank(creature.kind()));
        }
        performers
    }
}

fn trick_rank(kind: Kind) -> u8 {
    match kind {
        Kind::Dog => 0,
        Kind::Cat => 1,
        Kind::Fish => 2,
        Kind::Bird => 3,
    }
}

fn trick(creature: &Creature) -> String {
    match creature {
        Creature::Dog(dog) => dog.fetch(),
        Creature::Cat(cat) => cat.climb(),
        Creature::Bird(bird) => bird.fly(),
        Creature::Fish(fish) => fish.swim(),
    }
}
