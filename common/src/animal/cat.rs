use tracing::debug;

use super::{Animal, Speak};

/// A cat. Adds no attributes of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Cat {
    animal: Animal,
}

impl Cat {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f32,
        colour: impl Into<String>,
        friendly: bool,
        home: impl Into<String>,
    ) -> Self {
        let animal = Animal::new(name, age, weight, colour, friendly, home);
        debug!("Cat {} joins the menagerie", animal.name());
        Self { animal }
    }

    pub fn animal_mut(&mut self) -> &mut Animal {
        &mut self.animal
    }

    pub fn climb(&self) -> String {
        format!("{} is climbing the tree!", self.animal.name())
    }
}

impl Speak for Cat {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    fn make_sound(&self) -> String {
        format!("{} says: Meow! Meow!", self.animal.name())
    }
}
