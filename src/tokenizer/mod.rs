pub mod token;

pub use token::{Flags, Kind, Token};

use crate::charset::CharacterSet;
use crate::error::{Error, Result};
use std::iter::FusedIterator;
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Splits an identifier into words and symbols.
///
/// Words end on case boundaries: `topPosts` yields `top`, `Posts` and `TOPPosts` yields
/// `TOP`, `Posts`, while an all-caps run such as `TOPPOSTS` stays whole. Every
/// non-letter character is its own symbol token. A character outside the admissible set
/// produces an `Invalid` token, after which the tokenizer must not be advanced again.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    characters: &'a CharacterSet,
    pos: usize,
    width: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, characters: &'a CharacterSet) -> Self {
        Self {
            input,
            characters,
            pos: 0,
            width: 0,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advance past the next token and return it.
    pub fn token(&mut self) -> Token<'a> {
        let start = self.pos;
        let (ch, allowed) = self.next();

        match ch {
            _ if !allowed => Token::invalid(self.consumed()),
            None => Token::eof(),
            Some(ch) if is_letter(ch) => self.read_word(start),
            Some(_) => Token::symbol(self.consumed()),
        }
    }

    /// Decode the character at the cursor and step over it. `None` marks the end of
    /// input and is always admissible.
    fn next(&mut self) -> (Option<char>, bool) {
        match self.input[self.pos..].chars().next() {
            None => {
                self.width = 0;
                (None, true)
            }
            Some(ch) => {
                self.width = ch.len_utf8();
                self.pos += self.width;
                (Some(ch), self.characters.contains(ch))
            }
        }
    }

    fn peek(&mut self) -> (Option<char>, bool) {
        let pos = self.pos;
        let width = self.width;
        let result = self.next();
        self.pos = pos;
        self.width = width;
        result
    }

    /// Un-consume the last character returned by `next`.
    fn backup(&mut self) {
        self.pos -= self.width;
    }

    fn consumed(&self) -> &'a str {
        let input = self.input;
        &input[self.pos - self.width..self.pos]
    }

    fn upcoming(&self, ch: Option<char>) -> &'a str {
        let input = self.input;
        let len = ch.map_or(0, char::len_utf8);
        &input[self.pos..self.pos + len]
    }

    fn word(&self, start: usize, uppercase: bool) -> Token<'a> {
        let input = self.input;
        Token::word(&input[start..self.pos], Flags::uppercase(uppercase))
    }

    /// Scan the rest of a word whose first letter starts at `start` and has already been
    /// consumed.
    fn read_word(&mut self, start: usize) -> Token<'a> {
        let mut uppercase = true;
        let mut count = 1;

        let (peek, allowed) = self.peek();
        if !allowed {
            return Token::invalid(self.upcoming(peek));
        }
        // Single letters count as uppercase.
        if !peek.is_some_and(is_letter) {
            return self.word(start, true);
        }

        loop {
            let (ch, allowed) = self.next();
            if !allowed {
                return Token::invalid(self.consumed());
            }

            match ch {
                Some(ch) if is_letter(ch) => {
                    if uppercase && !is_uppercase(ch) {
                        uppercase = false;
                    }

                    let (peek, allowed) = self.peek();
                    if !allowed {
                        return Token::invalid(self.upcoming(peek));
                    }

                    let peek_uppercase = peek.is_some_and(is_uppercase);
                    if peek.is_some() && uppercase && count > 2 && !peek_uppercase {
                        // `ch` opens the next word: "TOPPosts" -> "TOP", "Posts"
                        self.backup();
                        return self.word(start, uppercase);
                    } else if !uppercase && peek_uppercase {
                        return self.word(start, uppercase);
                    }
                    count += 1;
                }
                _ => {
                    self.backup();
                    return self.word(start, uppercase);
                }
            }
        }
    }
}

/// General category `L*`.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// General category `Lu`.
fn is_uppercase(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::UppercaseLetter
}

impl<'a> IntoIterator for Tokenizer<'a> {
    type Item = Token<'a>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }
}

/// Iterator over the tokens of an input.
///
/// Stops before `EOF`. An `Invalid` token is yielded once and ends the iteration.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    tokenizer: Tokenizer<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let token = self.tokenizer.token();
        trace!(kind = %token.kind, value = token.value, "token");

        if token.is_terminal() {
            self.done = true;
        }
        (token.kind != Kind::Eof).then_some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Collect every token of `input`, including a trailing `Invalid` token if one occurs.
pub fn tokenize<'a>(input: &'a str, characters: &'a CharacterSet) -> Vec<Token<'a>> {
    Tokenizer::new(input, characters).into_iter().collect()
}

/// Like [`tokenize`], but reports an inadmissible character as an error.
pub fn split<'a>(input: &'a str, characters: &'a CharacterSet) -> Result<Vec<Token<'a>>> {
    let mut tokens = Vec::new();

    for token in Tokenizer::new(input, characters) {
        if token.kind == Kind::Invalid {
            let character = token.value.chars().next().unwrap_or_default();
            let offset = offset_of(input, token.value);
            debug!(input, offset, "rejected inadmissible character {:?}", character);
            return Err(Error::InvalidCharacter { character, offset });
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Byte offset of `value` inside `input`; `value` must be a subslice of `input`.
fn offset_of(input: &str, value: &str) -> usize {
    value.as_ptr() as usize - input.as_ptr() as usize
}
