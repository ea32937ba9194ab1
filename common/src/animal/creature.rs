use std::fmt;

use super::{Animal, Bird, Cat, Dog, Fish, Kind, Speak};

/// Any one of the four kinds, held by value.
///
/// Lets a single ordered collection hold every kind while the shared
/// capability still resolves to each element's own implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum Creature {
    Dog(Dog),
    Cat(Cat),
    Bird(Bird),
    Fish(Fish),
}

impl Creature {
    pub fn kind(&self) -> Kind {
        match self {
            Creature::Dog(_) => Kind::Dog,
            Creature::Cat(_) => Kind::Cat,
            Creature::Bird(_) => Kind::Bird,
            Creature::Fish(_) => Kind::Fish,
        }
    }

    pub fn animal_mut(&mut self) -> &mut Animal {
        match self {
            Creature::Dog(dog) => dog.animal_mut(),
            Creature::Cat(cat) => cat.animal_mut(),
            Creature::Bird(bird) => bird.animal_mut(),
            Creature::Fish(fish) => fish.animal_mut(),
        }
    }
}

impl Speak for Creature {
    fn animal(&self) -> &Animal {
        match self {
            Creature::Dog(dog) => dog.animal(),
            Creature::Cat(cat) => cat.animal(),
            Creature::Bird(bird) => bird.animal(),
            Creature::Fish(fish) => fish.animal(),
        }
    }

    fn make_sound(&self) -> String {
        match self {
            Creature::Dog(dog) => dog.make_sound(),
            Creature::Cat(cat) => cat.make_sound(),
            Creature::Bird(bird) => bird.make_sound(),
            Creature::Fish(fish) => fish.make_sound(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Creature::Dog(dog) => dog.describe(),
            Creature::Cat(cat) => cat.describe(),
            Creature::Bird(bird) => bird.describe(),
            Creature::Fish(fish) => fish.describe(),
        }
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Dog> for Creature {
    fn from(dog: Dog) -> Self {
        Creature::Dog(dog)
    }
}

impl From<Cat> for Creature {
    fn from(cat: Cat) -> Self {
        Creature::Cat(cat)
    }
}

impl From<Bird> for Creature {
    fn from(bird: Bird) -> Self {
        Creature::Bird(bird)
    }
}

impl From<Fish> for Creature {
    fn from(fish: Fish) -> Self {
        Creature::Fish(fish)
    }
}
