use std::fmt;
use std::str::FromStr;

use crate::error::MenagerieError;

/// Names one of the four kinds of creature, without any of its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Dog,
    Cat,
    Bird,
    Fish,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Dog, Kind::Cat, Kind::Bird, Kind::Fish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Dog => "dog",
            Kind::Cat => "cat",
            Kind::Bird => "bird",
            Kind::Fish => "fish",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = MenagerieError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| MenagerieError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!(Kind::from_str("dog"), Ok(Kind::Dog));
        assert_eq!(Kind::from_str("CAT"), Ok(Kind::Cat));
        assert_eq!(Kind::from_str(" Bird "), Ok(Kind::Bird));
        assert_eq!("fIsH".parse::<Kind>(), Ok(Kind::Fish));
    }

    #[test]
    fn rejects_unknown_kinds() {
        assert_eq!(
            Kind::from_str("hamster"),
            Err(MenagerieError::UnknownKind(String::from("hamster")))
        );
        assert!(Kind::from_str("").is_err());
    }

    #[test]
    fn display_matches_parse_input() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
    }
}
