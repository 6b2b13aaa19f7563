//! Token types shared by the tokenizer, the indentation engine and the drivers.
//!
//! Two things come out of every tokenizer call:
//!
//!     Category:
//!         What the consumed text is, for highlighting purposes. See [TokenCategory].
//!
//!     Signal:
//!         The structural meaning of the token, if it has one. Only the indentation engine
//!         consumes it: brackets open and close contexts, `;` and `:` end statements, and
//!         block-introducing keywords ask for a new implicit statement level. See [Signal].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highlighting category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Keyword,
    Builtin,
    Atom,
    Number,
    String,
    Comment,
    /// Preprocessor-style directive lines, kept unparsed.
    Meta,
    Operator,
    Bracket,
    /// Identifier not found in any grammar table.
    Word,
}

impl TokenCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Builtin => "builtin",
            TokenCategory::Atom => "atom",
            TokenCategory::Number => "number",
            TokenCategory::String => "string",
            TokenCategory::Comment => "comment",
            TokenCategory::Meta => "meta",
            TokenCategory::Operator => "operator",
            TokenCategory::Bracket => "bracket",
            TokenCategory::Word => "word",
        }
    }

    /// Comments and directives never reach the context stack.
    pub fn is_transparent(self) -> bool {
        matches!(self, TokenCategory::Comment | TokenCategory::Meta)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three bracket kinds, named after the character that closes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Closer {
    Brace,
    Bracket,
    Paren,
}

impl Closer {
    pub fn close_char(self) -> char {
        match self {
            Closer::Brace => '}',
            Closer::Bracket => ']',
            Closer::Paren => ')',
        }
    }
}

/// Structural classification of the token just produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Open(Closer),
    Close(Closer),
    Comma,
    Semicolon,
    Colon,
    Dot,
    /// Emitted for block-introducing keywords (`if`, `for`, `while`, ...).
    NewStatement,
}

impl Signal {
    /// Map one of `[ ] { } ( ) , ; : .` to its signal.
    pub fn from_punctuation(ch: char) -> Option<Signal> {
        let signal = match ch {
            '{' => Signal::Open(Closer::Brace),
            '[' => Signal::Open(Closer::Bracket),
            '(' => Signal::Open(Closer::Paren),
            '}' => Signal::Close(Closer::Brace),
            ']' => Signal::Close(Closer::Bracket),
            ')' => Signal::Close(Closer::Paren),
            ',' => Signal::Comma,
            ';' => Signal::Semicolon,
            ':' => Signal::Colon,
            '.' => Signal::Dot,
            _ => return None,
        };
        Some(signal)
    }

    pub fn ends_statement(self) -> bool {
        matches!(self, Signal::Semicolon | Signal::Colon)
    }
}

/// Result of a single tokenizer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexed {
    pub category: TokenCategory,
    pub signal: Option<Signal>,
}

impl Lexed {
    pub fn new(category: TokenCategory) -> Self {
        Lexed {
            category,
            signal: None,
        }
    }

    pub fn with_signal(category: TokenCategory, signal: Signal) -> Self {
        Lexed {
            category,
            signal: Some(signal),
        }
    }
}

impl From<TokenCategory> for Lexed {
    fn from(category: TokenCategory) -> Self {
        Lexed::new(category)
    }
}
