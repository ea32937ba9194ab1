use menagerie_common::animal::{Bird, Creature, Dog, Kind, Speak};
use menagerie_core::roster;
use menagerie_core::showcase::{Entry, Section, Tour, Transcript};

const BUDDY: &str = "Buddy is 3 years old, weighs 3.3kg, is black and white in colour, is friendly, and lives in a kennel.";

/// The full tour tells descriptions and sounds in roster order, then the
/// tricks as fetch, climb, swim, fly.
#[test]
fn full_tour_transcript() {
    let mut transcript: Transcript = Transcript::new();
    let told = Tour::new(roster::default_roster()).run(&Section::ALL, &mut transcript);

    let expected: [&str; 12] = [
        BUDDY,
        "Whiskers is 2 years old, weighs 4.1kg, is ginger in colour, is friendly, and lives in a cosy basket.",
        "Feathers is 2 years old, weighs 0.3kg, is blue and yellow in colour, is NOT friendly, and lives in a cage in the lounge. It has 2 wing(s) and can fly.",
        "Nemo is 1 years old, weighs 0.2kg, is orange and white in colour, is NOT friendly, and lives in a coral reef. It has 5 fin(s).",
        "Buddy says: Woof! Woof!",
        "Whiskers says: Meow! Meow!",
        "Feathers says: Chirp! Chirp!",
        "Nemo doesn't make a sound — it's a fish!",
        "Buddy is fetching the ball!",
        "Whiskers is climbing the tree!",
        "Nemo is swimming in the ocean!",
        "Feathers is soaring through the sky!",
    ];

    assert_eq!(told, expected.len());
    assert_eq!(transcript.lines(), expected);
}

#[test]
fn sections_open_before_their_lines() {
    let mut transcript: Transcript = Transcript::new();
    Tour::new(roster::default_roster()).run(&Section::ALL, &mut transcript);

    let entries = transcript.entries();
    assert_eq!(entries.len(), 15);

    for (idx, section) in Section::ALL.into_iter().enumerate() {
        assert_eq!(entries[idx * 5], Entry::Section(section));
    }
}

#[test]
fn chorus_follows_the_filtered_roster() {
    let mut transcript: Transcript = Transcript::new();
    Tour::new(roster::default_roster())
        .only(&[Kind::Bird, Kind::Cat])
        .run(&[Section::Chorus], &mut transcript);

    assert_eq!(
        transcript.lines(),
        ["Whiskers says: Meow! Meow!", "Feathers says: Chirp! Chirp!"]
    );
}

#[test]
fn grounded_bird_says_so_in_the_tricks() {
    let mut grounded: Bird = roster::feathers();
    grounded.set_can_fly(false);

    let creatures: Vec<Creature> = vec![roster::buddy().into(), grounded.into()];
    let mut transcript: Transcript = Transcript::new();
    Tour::new(creatures).run(&[Section::Tricks], &mut transcript);

    assert_eq!(
        transcript.lines(),
        ["Buddy is fetching the ball!", "Feathers cannot fly!"]
    );
}

#[test]
fn roster_dog_matches_the_reference_scenario() {
    let dog: Dog = roster::buddy();

    assert_eq!(dog.describe(), BUDDY);
    assert_eq!(dog.make_sound(), "Buddy says: Woof! Woof!");
}

#[test]
fn short_form_dog_joins_the_tour() {
    let creatures: Vec<Creature> = vec![Dog::with_name_and_age("Pup", 0).into()];
    let mut transcript: Transcript = Transcript::new();
    Tour::new(creatures).run(&[Section::Describe], &mut transcript);

    assert_eq!(
        transcript.lines(),
        ["Pup is 0 years old, weighs 0.0kg, is unknown in colour, is NOT friendly, and lives in a unknown."]
    );
}
