//! Guessable letters.

/// An uppercase ASCII letter, the only thing a player may guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Creates a letter from either case, or `None` if `c` is not `A..=Z`.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Takes the first character of `input` as a letter, ignoring leading whitespace.
    pub fn from_input(input: &str) -> Option<Self> {
        input.trim_start().chars().next().and_then(Self::new)
    }

    /// Returns the uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}
