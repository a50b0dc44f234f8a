//! Case-aware identifier tokenizer.
//!
//! ```
//! use identsplit::{tokenize, CharacterSet, Kind};
//!
//! let characters = CharacterSet::identifier();
//! let words: Vec<&str> = tokenize("XMLHttpRequest", &characters)
//!     .into_iter()
//!     .filter(|t| t.kind == Kind::Word)
//!     .map(|t| t.value)
//!     .collect();
//! assert_eq!(words, ["XML", "Http", "Request"]);
//! ```

pub mod charset;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tokenizer;

pub use charset::CharacterSet;
pub use config::Config;
pub use error::{Error, Result};
pub use tokenizer::{split, tokenize, Flags, Kind, Token, Tokenizer, Tokens};
