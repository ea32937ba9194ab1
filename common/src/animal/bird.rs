use tracing::debug;

use super::{Animal, Speak};

/// A bird. Tracks its wings and whether it can actually fly.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    animal: Animal,
    number_of_wings: u32,
    can_fly: bool,
}

impl Bird {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f32,
        colour: impl Into<String>,
        friendly: bool,
        home: impl Into<String>,
        number_of_wings: u32,
        can_fly: bool,
    ) -> Self {
        let animal = Animal::new(name, age, weight, colour, friendly, home);
        debug!("Bird {} joins the menagerie", animal.name());
        Self {
            animal,
            number_of_wings,
            can_fly,
        }
    }

    pub fn animal_mut(&mut self) -> &mut Animal {
        &mut self.animal
    }

    pub fn number_of_wings(&self) -> u32 {
        self.number_of_wings
    }

    pub fn set_number_of_wings(&mut self, number_of_wings: u32) {
        self.number_of_wings = number_of_wings;
    }

    pub fn can_fly(&self) -> bool {
        self.can_fly
    }

    pub fn set_can_fly(&mut self, can_fly: bool) {
        self.can_fly = can_fly;
    }

    /// Narrates a flight, or the lack of one when `can_fly` is unset.
    pub fn fly(&self) -> String {
        if self.can_fly {
            format!("{} is soaring through the sky!", self.animal.name())
        } else {
            format!("{} cannot fly!", self.animal.name())
        }
    }
}

impl Speak for Bird {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    fn make_sound(&self) -> String {
        format!("{} says: Chirp! Chirp!", self.animal.name())
    }

    fn describe(&self) -> String {
        let flight: &str = if self.can_fly { "can" } else { "cannot" };
        format!(
            "{} It has {} wing(s) and {} fly.",
            self.animal, self.number_of_wings, flight
        )
    }
}
