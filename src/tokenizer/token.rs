use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Eof,
    Invalid,
    Word,
    Symbol,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Eof => write!(f, "EOF"),
            Kind::Invalid => write!(f, "Invalid"),
            Kind::Word => write!(f, "Word"),
            Kind::Symbol => write!(f, "Symbol"),
        }
    }
}

/// Bit set of token attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// No letter after the first is lowercase or caseless. One-letter words always carry it.
    pub const UPPERCASE: Flags = Flags(1);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) fn uppercase(set: bool) -> Flags {
        if set {
            Flags::UPPERCASE
        } else {
            Flags::NONE
        }
    }
}

/// A single unit produced by [`Tokenizer`](super::Tokenizer).
///
/// `value` always borrows from the tokenizer input, so the byte range of a token can be
/// recovered from the slice itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: Kind,
    pub value: &'a str,
    pub flags: Flags,
}

impl<'a> Token<'a> {
    pub fn eof() -> Self {
        Self {
            kind: Kind::Eof,
            value: "",
            flags: Flags::NONE,
        }
    }

    pub fn invalid(value: &'a str) -> Self {
        Self {
            kind: Kind::Invalid,
            value,
            flags: Flags::NONE,
        }
    }

    pub fn word(value: &'a str, flags: Flags) -> Self {
        Self {
            kind: Kind::Word,
            value,
            flags,
        }
    }

    pub fn symbol(value: &'a str) -> Self {
        Self {
            kind: Kind::Symbol,
            value,
            flags: Flags::NONE,
        }
    }

    pub fn uppercase(&self) -> bool {
        self.flags.contains(Flags::UPPERCASE)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, Kind::Eof | Kind::Invalid)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)?;
        if self.uppercase() {
            write!(f, " [uppercase]")?;
        }
        Ok(())
    }
}
