use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("character {character:?} at byte {offset} is not in the admissible set")]
    InvalidCharacter { character: char, offset: usize },

    #[error("the admissible character set is empty")]
    EmptyCharacterSet,
}

pub type Result<T> = std::result::Result<T, Error>;
