//! # glsl-mode
//!
//! An incremental lexer and bracket-aware indentation engine for GLSL.
//!
//! File Layout
//!
//! The engine is split the same way an editor consumes it: a line-oriented tokenizer that
//! carries a small state between calls, and a context stack that turns the punctuation the
//! tokenizer reports into indentation decisions.
//!
//! src/glsl
//!   ├── stream        Cursor over a single line
//!   ├── token         Token categories and punctuation signals
//!   ├── grammar       Keyword / builtin / atom tables
//!   ├── lexing        Tokenizer dispatch and its sub-state machines
//!   ├── indentation   Context stack and indentation computation
//!   ├── mode          Public entry points (start state, next token, indent)
//!   └── highlight, buffer, formatting, language
//!                     Drivers built on top of the mode
//!
//! For testing helpers, see the [testing module](glsl::testing).

pub mod glsl;

pub use glsl::mode::{GlslMode, LexState, ModeConfig};
pub use glsl::token::{Signal, TokenCategory};
