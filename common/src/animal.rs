//! # Animal Model
//!
//! The shared attributes every creature carries, and the capability each
//! concrete kind has to provide.
//!
//! * [`Animal`]: name, age, weight, colour, friendliness and home. Every
//!   attribute is private and reached through a getter/setter pair.
//! * [`Speak`]: the sound-producing capability. It has no default body, so a
//!   kind cannot be built into a [`Creature`] without implementing it.
//! * [`Dog`], [`Cat`], [`Bird`], [`Fish`]: the closed set of kinds. Each owns
//!   an [`Animal`] and adds its own attributes and behavior.

use std::fmt;

pub mod bird;
pub mod cat;
pub mod creature;
pub mod dog;
pub mod fish;
pub mod kind;

pub use bird::Bird;
pub use cat::Cat;
pub use creature::Creature;
pub use dog::Dog;
pub use fish::Fish;
pub use kind::Kind;

/// Attributes shared by every kind of creature.
///
/// Nothing is validated: a negative weight or an empty name is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    name: String,
    age: u32,
    weight: f32,
    colour: String,
    friendly: bool,
    home: String,
}

impl Animal {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight: f32,
        colour: impl Into<String>,
        friendly: bool,
        home: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            colour: colour.into(),
            friendly,
            home: home.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn set_colour(&mut self, colour: impl Into<String>) {
        self.colour = colour.into();
    }

    pub fn is_friendly(&self) -> bool {
        self.friendly
    }

    pub fn set_friendly(&mut self, friendly: bool) {
        self.friendly = friendly;
    }

    /// Free-form description of where the animal lives.
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn set_home(&mut self, home: impl Into<String>) {
        self.home = home.into();
    }

    /// One sentence summarising every shared attribute.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let friendly: &str = if self.friendly { "is" } else { "is NOT" };
        write!(
            f,
            "{} is {} years old, weighs {}kg, is {} in colour, {} friendly, and lives in a {}.",
            self.name,
            self.age,
            one_decimal(self.weight),
            self.colour,
            friendly,
            self.home
        )
    }
}

/// Rounds to one decimal place, half away from zero, starting from the
/// shortest decimal form of `value` (`0.25` gives `0.3`, `9.96` gives `10.0`).
fn one_decimal(value: f32) -> String {
    if !value.is_finite() {
        return format!("{value:.1}");
    }

    let shortest: String = value.abs().to_string();
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    // Every digit up to and including the tenths, as numbers.
    let mut digits: Vec<u8> = whole.bytes().map(|b| b - b'0').collect();
    digits.push(frac.bytes().next().map_or(0, |b| b - b'0'));

    if frac.as_bytes().get(1).is_some_and(|&b| b >= b'5') {
        let mut idx: usize = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let sign: &str = if value.is_sign_negative() { "-" } else { "" };
    let (units, tenths) = digits.split_at(digits.len() - 1);
    let units: String = units.iter().map(|d| char::from(b'0' + d)).collect();

    format!("{sign}{units}.{}", tenths[0])
}

/// The capability every kind of creature must implement.
pub trait Speak {
    /// The shared attributes of this creature.
    fn animal(&self) -> &Animal;

    /// The line this creature says. Never depends on anything but the name.
    fn make_sound(&self) -> String;

    /// Kinds with extra attributes override this to append them.
    fn describe(&self) -> String {
        self.animal().describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> Animal {
        Animal::new("Rex", 4, 12.3, "brown", false, "yard")
    }

    #[test]
    fn accessors_return_constructed_values() {
        let animal = rex();

        assert_eq!(animal.name(), "Rex");
        assert_eq!(animal.age(), 4);
        assert_eq!(animal.weight(), 12.3);
        assert_eq!(animal.colour(), "brown");
        assert!(!animal.is_friendly());
        assert_eq!(animal.home(), "yard");
    }

    #[test]
    fn setters_replace_each_attribute() {
        let mut animal = rex();

        animal.set_name("Max");
        animal.set_age(7);
        animal.set_weight(20.0);
        animal.set_colour(String::from("grey"));
        animal.set_friendly(true);
        animal.set_home("farm");

        assert_eq!(animal, Animal::new("Max", 7, 20.0, "grey", true, "farm"));
    }

    #[test]
    fn describe_rounds_weight_to_one_decimal() {
        let animal = Animal::new("Tiny", 0, 0.06, "white", true, "box");

        assert_eq!(
            animal.describe(),
            "Tiny is 0 years old, weighs 0.1kg, is white in colour, is friendly, and lives in a box."
        );
    }

    #[test]
    fn describe_rounds_half_weights_up() {
        let weighs = |weight: f32| Animal::new("X", 1, weight, "c", true, "h").describe();

        assert!(weighs(0.25).contains("weighs 0.3kg"));
        assert!(weighs(0.75).contains("weighs 0.8kg"));
        assert!(weighs(1.25).contains("weighs 1.3kg"));
    }

    #[test]
    fn one_decimal_carries_and_pads() {
        assert_eq!(one_decimal(9.96), "10.0");
        assert_eq!(one_decimal(99.95), "100.0");
        assert_eq!(one_decimal(3.0), "3.0");
        assert_eq!(one_decimal(3.3), "3.3");
        assert_eq!(one_decimal(0.04), "0.0");
        assert_eq!(one_decimal(-1.25), "-1.3");
    }

    #[test]
    fn describe_marks_unfriendly_animals() {
        assert_eq!(
            rex().describe(),
            "Rex is 4 years old, weighs 12.3kg, is brown in colour, is NOT friendly, and lives in a yard."
        );
    }
}
