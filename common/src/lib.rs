//! Shared models for the menagerie workspace: the creatures themselves, the
//! runtime configuration and the error type.

pub mod animal;
pub mod config;
pub mod error;

pub use animal::{Animal, Bird, Cat, Creature, Dog, Fish, Kind, Speak};
pub use error::MenagerieError;
