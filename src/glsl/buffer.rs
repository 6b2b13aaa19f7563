//! Incremental lexing
//!
//!     A LexedBuffer keeps, for every line, the lexer state at the start of that line together
//!     with the line's tokens. After an edit only the edited line has to be lexed again; the
//!     following lines are re-lexed one by one until the state reaching a line start equals the
//!     state cached for it, at which point nothing further down can have changed.
//!
//!     Each buffer owns its states; nothing is shared between buffers except the mode's
//!     read-only grammar tables.

use crate::glsl::highlight::{lex_line, Token};
use crate::glsl::mode::{GlslMode, LexState};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    LineOutOfRange { line: usize, len: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::LineOutOfRange { line, len } => {
                write!(f, "Line {} out of range (buffer has {} lines)", line, len)
            }
        }
    }
}

impl std::error::Error for BufferError {}

#[derive(Debug, Clone)]
pub struct LexedBuffer {
    mode: GlslMode,
    lines: Vec<String>,
    starts: Vec<LexState>,
    tokens: Vec<Vec<Token>>,
    end_state: LexState,
}

impl LexedBuffer {
    pub fn new(mode: GlslMode, text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let start = mode.start_state(0);
        let mut buffer = LexedBuffer {
            starts: vec![start.clone(); lines.len()],
            tokens: vec![Vec::new(); lines.len()],
            end_state: start,
            lines,
            mode,
        };
        if !buffer.lines.is_empty() {
            buffer.lex_lines(0, false);
        }
        buffer
    }

    pub fn mode(&self) -> &GlslMode {
        &self.mode
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Result<&str, BufferError> {
        self.check(index)?;
        Ok(&self.lines[index])
    }

    pub fn tokens(&self, index: usize) -> Result<&[Token], BufferError> {
        self.check(index)?;
        Ok(&self.tokens[index])
    }

    /// Lexer state at the start of line `index`.
    pub fn state_before(&self, index: usize) -> Result<&LexState, BufferError> {
        self.check(index)?;
        Ok(&self.starts[index])
    }

    /// Lexer state after the last line.
    pub fn end_state(&self) -> &LexState {
        &self.end_state
    }

    /// The indentation the mode proposes for line `index`, given its current content.
    pub fn indentation_for(&self, index: usize) -> Result<usize, BufferError> {
        self.check(index)?;
        Ok(self
            .mode
            .indent(&self.starts[index], self.lines[index].trim_start()))
    }

    /// Replace the text of a line. Returns how many lines were lexed again.
    pub fn replace_line(&mut self, index: usize, text: &str) -> Result<usize, BufferError> {
        self.check(index)?;
        self.lines[index] = text.to_string();
        Ok(self.relex_from(index))
    }

    /// Insert a line before `index` (`index == line_count()` appends).
    pub fn insert_line(&mut self, index: usize, text: &str) -> Result<usize, BufferError> {
        if index > self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                line: index,
                len: self.lines.len(),
            });
        }
        let start = self
            .starts
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.end_state.clone());
        self.lines.insert(index, text.to_string());
        self.starts.insert(index, start);
        self.tokens.insert(index, Vec::new());
        Ok(self.relex_from(index))
    }

    pub fn remove_line(&mut self, index: usize) -> Result<usize, BufferError> {
        self.check(index)?;
        let start = self.starts.remove(index);
        self.lines.remove(index);
        self.tokens.remove(index);
        if index == self.lines.len() {
            self.end_state = start;
            return Ok(0);
        }
        self.starts[index] = start;
        Ok(self.relex_from(index))
    }

    /// The whole buffer, one `\n` after every line.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    fn check(&self, index: usize) -> Result<(), BufferError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(BufferError::LineOutOfRange {
                line: index,
                len: self.lines.len(),
            })
        }
    }

    /// Lex from line `from` until the states converge. `starts[from]` must be correct and every
    /// later checkpoint must hold the state from before the edit.
    fn relex_from(&mut self, from: usize) -> usize {
        self.lex_lines(from, true)
    }

    /// Lex from line `from`, to the end unless `converge` allows stopping at a line whose cached
    /// start state is already the one just computed.
    fn lex_lines(&mut self, from: usize, converge: bool) -> usize {
        let mut state = self.starts[from].clone();
        let mut relexed = 0;
        for index in from..self.lines.len() {
            if converge && index > from && self.starts[index] == state {
                debug!("re-lexed {} line(s) from {}, converged at {}", relexed, from, index);
                return relexed;
            }
            self.starts[index] = state.clone();
            self.tokens[index] = lex_line(&self.mode, &self.lines[index], &mut state);
            relexed += 1;
        }
        debug!("re-lexed {} line(s) from {} to the end", relexed, from);
        self.end_state = state;
        relexed
    }
}
