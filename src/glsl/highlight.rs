//! Line and source drivers
//!
//!     Hosts that do not manage streams themselves can use these helpers to run the mode over a
//!     line or a whole source. They follow the host conventions the mode is written for: each
//!     line gets a fresh stream, empty lines produce no tokenizer calls, and whitespace runs are
//!     consumed but not reported.

use crate::glsl::mode::{GlslMode, LexState};
use crate::glsl::token::TokenCategory;
use serde::Serialize;
use std::ops::Range;

/// A classified piece of a line. `span` is a byte range within the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
    pub span: Range<usize>,
}

/// The tokens of one source line. `number` is zero based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    pub number: usize,
    pub tokens: Vec<Token>,
}

/// Lex one line, continuing from `state`.
pub fn lex_line(mode: &GlslMode, line: &str, state: &mut LexState) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut stream = mode.stream(line);
    while !stream.eol() {
        let category = mode.token(&mut stream, state);
        if let Some(category) = category {
            tokens.push(Token {
                category,
                text: stream.current().to_string(),
                span: stream.start()..stream.pos(),
            });
        }
    }
    tokens
}

/// Lex a whole source from a fresh state. Returns the tokens per line and the final state.
pub fn lex_source(mode: &GlslMode, source: &str) -> (Vec<LineTokens>, LexState) {
    let mut state = mode.start_state(0);
    let lines = source
        .lines()
        .enumerate()
        .map(|(number, line)| LineTokens {
            number,
            tokens: lex_line(mode, line, &mut state),
        })
        .collect();
    (lines, state)
}

/// Render tokens as `category:text` pairs, one line of output per source line.
pub fn render_simple(lines: &[LineTokens]) -> String {
    let mut out = String::new();
    for line in lines {
        let rendered: Vec<String> = line
            .tokens
            .iter()
            .map(|token| format!("{}:{}", token.category, token.text))
            .collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}
