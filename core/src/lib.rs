//! The guided tour of the menagerie.
//!
//! * [`roster`]: the creatures the tour introduces.
//! * [`showcase`]: the ordered sections of the tour and the [`showcase::Narrator`]
//!   port it writes through.

pub mod roster;
pub mod showcase;
