use tracing::debug;

use super::{Animal, Speak};

/// A fish. Tracks its fins.
#[derive(Debug, Clone, PartialEq)]
pub struct Fish {
    animal: Animal,
    number_of_fins: u32,
}

impl Fish {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f32,
        colour: impl Into<String>,
        friendly: bool,
        home: impl Into<String>,
        number_of_fins: u32,
    ) -> Self {
        let animal = Animal::new(name, age, weight, colour, friendly, home);
        debug!("Fish {} joins the menagerie", animal.name());
        Self {
            animal,
            number_of_fins,
        }
    }

    pub fn animal_mut(&mut self) -> &mut Animal {
        &mut self.animal
    }

    pub fn number_of_fins(&self) -> u32 {
        self.number_of_fins
    }

    pub fn set_number_of_fins(&mut self, number_of_fins: u32) {
        self.number_of_fins = number_of_fins;
    }

    pub fn swim(&self) -> String {
        format!("{} is swimming in the ocean!", self.animal.name())
    }
}

impl Speak for Fish {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    /// Fish are silent, so the line says as much instead of a sound.
    fn make_sound(&self) -> String {
        format!("{} doesn't make a sound — it's a fish!", self.animal.name())
    }

    fn describe(&self) -> String {
        format!("{} It has {} fin(s).", self.animal, self.number_of_fins)
    }
}
