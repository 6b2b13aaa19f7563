//! Tokenizer
//!
//!     The tokenizer is a small state machine driven one call at a time. Each call consumes at
//!     least one character of the current line and reports a [Lexed] value: the category of the
//!     consumed text and, for structural tokens, a [Signal] for the indentation engine.
//!
//!     Which function handles a call depends on the sub-state carried in the lexer state:
//!
//!         Base:
//!             The dispatcher. See [base]. Decides what the next lexeme is and, for quotes and
//!             block comment openers, switches into one of the sub-states below.
//!
//!         InString:
//!             Consumes a quoted literal up to the matching unescaped quote. See [string].
//!
//!         InComment:
//!             Consumes a block comment up to `*/`. Block comments do not nest. See [comment].
//!
//!     Sub-states survive line boundaries, which is how a block comment (and, when enabled, a
//!     string) spans several lines. Nothing here can fail: unrecognized text is consumed and
//!     classified as a plain word.
//!
//!     Hooks (see [hooks]) run before the base dispatch for their trigger character and may
//!     claim the token; the GLSL mode uses one to color preprocessor lines.

pub mod base;
pub mod comment;
pub mod hooks;
pub mod string;

pub use hooks::{HookFn, HookKind, HookTable};

use crate::glsl::mode::{LexState, ModeConfig};
use crate::glsl::stream::StringStream;
use crate::glsl::token::Lexed;

/// Which tokenizer handles the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubState {
    #[default]
    Base,
    InString {
        quote: char,
    },
    InComment,
}

impl SubState {
    /// True inside a literal or comment that continues past the line end.
    pub fn is_literal(self) -> bool {
        !matches!(self, SubState::Base)
    }
}

/// Run the tokenizer selected by the current sub-state.
///
/// The stream's token start must already be set; whitespace handling is the caller's job.
pub fn tokenize(stream: &mut StringStream<'_>, state: &mut LexState, config: &ModeConfig) -> Lexed {
    match state.tokenize {
        SubState::Base => base::token_base(stream, state, config),
        SubState::InString { quote } => string::token_string(
            stream,
            &mut state.tokenize,
            quote,
            config.multi_line_strings,
        ),
        SubState::InComment => comment::token_comment(stream, &mut state.tokenize),
    }
}
