use tracing::debug;

use super::{Animal, Speak};

/// Weight given to a dog built with [`Dog::with_name_and_age`].
pub const UNKNOWN_WEIGHT: f32 = 0.0;
/// Colour given to a dog built with [`Dog::with_name_and_age`].
pub const UNKNOWN_COLOUR: &str = "unknown";
/// Home given to a dog built with [`Dog::with_name_and_age`].
pub const UNKNOWN_HOME: &str = "unknown";

/// A dog. Adds no attributes of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    animal: Animal,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f32,
        colour: impl Into<String>,
        friendly: bool,
        home: impl Into<String>,
    ) -> Self {
        let animal = Animal::new(name, age, weight, colour, friendly, home);
        debug!("Dog {} joins the menagerie", animal.name());
        Self { animal }
    }

    /// Short form for a dog whose details are not known yet.
    ///
    /// Weight, colour and home fall back to the `UNKNOWN_*` placeholders and
    /// the dog is recorded as not friendly.
    pub fn with_name_and_age(name: impl Into<String>, age: u32) -> Self {
        Self::new(name, age, UNKNOWN_WEIGHT, UNKNOWN_COLOUR, false, UNKNOWN_HOME)
    }

    pub fn animal_mut(&mut self) -> &mut Animal {
        &mut self.animal
    }

    pub fn fetch(&self) -> String {
        format!("{} is fetching the ball!", self.animal.name())
    }
}

impl Speak for Dog {
    fn animal(&self) -> &Animal {
        &self.animal
    }

    fn make_sound(&self) -> String {
        format!("{} says: Woof! Woof!", self.animal.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buddy() -> Dog {
        Dog::new("Buddy", 3, 3.3, "black and white", true, "kennel")
    }

    #[test]
    fn buddy_describes_himself_and_barks() {
        let dog = buddy();

        assert_eq!(
            dog.describe(),
            "Buddy is 3 years old, weighs 3.3kg, is black and white in colour, is friendly, and lives in a kennel."
        );
        assert_eq!(dog.make_sound(), "Buddy says: Woof! Woof!");
    }

    #[test]
    fn short_form_fills_placeholders() {
        let dog = Dog::with_name_and_age("Scruffy", 5);
        let animal = dog.animal();

        assert_eq!(animal.name(), "Scruffy");
        assert_eq!(animal.age(), 5);
        assert_eq!(animal.weight(), UNKNOWN_WEIGHT);
        assert_eq!(animal.colour(), "unknown");
        assert!(!animal.is_friendly());
        assert_eq!(animal.home(), "unknown");
    }

    #[test]
    fn bark_ignores_everything_but_the_name() {
        let mut dog = buddy();
        dog.animal_mut().set_age(11);
        dog.animal_mut().set_friendly(false);
        dog.animal_mut().set_colour("golden");

        assert_eq!(dog.make_sound(), "Buddy says: Woof! Woof!");

        dog.animal_mut().set_name("Rover");
        assert_eq!(dog.make_sound(), "Rover says: Woof! Woof!");
        assert_eq!(dog.fetch(), "Rover is fetching the ball!");
    }
}
