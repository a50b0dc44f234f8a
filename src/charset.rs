use std::collections::BTreeSet;
use std::fmt;

/// ASCII letters, ASCII digits, `_` and `$`.
pub const IDENTIFIER_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_$";

/// The set of characters a [`Tokenizer`](crate::Tokenizer) accepts.
///
/// Any character outside the set turns the token stream `Invalid` at that position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: BTreeSet<char>,
}

impl CharacterSet {
    pub fn new(chars: &str) -> Self {
        chars.chars().collect()
    }

    pub fn identifier() -> Self {
        Self::new(IDENTIFIER_CHARACTERS)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn extend(&mut self, chars: &str) {
        self.chars.extend(chars.chars());
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for CharacterSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}
