//! # Default Roster
//!
//! One creature of every kind, always in the order dog, cat, bird, fish.

use menagerie_common::animal::{Bird, Cat, Creature, Dog, Fish};
use tracing::debug;

pub fn buddy() -> Dog {
    Dog::new("Buddy", 3, 3.3, "black and white", true, "kennel")
}

pub fn whiskers() -> Cat {
    Cat::new("Whiskers", 2, 4.1, "ginger", true, "cosy basket")
}

pub fn feathers() -> Bird {
    Bird::new("Feathers", 2, 0.3, "blue and yellow", false, "cage in the lounge", 2, true)
}

pub fn nemo() -> Fish {
    Fish::new("Nemo", 1, 0.2, "orange and white", false, "coral reef", 5)
}

pub fn default_roster() -> Vec<Creature> {
    let creatures: Vec<Creature> = vec![
        buddy().into(),
        whiskers().into(),
        feathers().into(),
        nemo().into(),
    ];
    debug!("Roster assembled with {} creatures", creatures.len());
    creatures
}
