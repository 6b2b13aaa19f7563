//! Testing utilities
//!
//!     Shared helpers for unit and integration tests.
//!
//! Sample Sources
//!
//!     Shader sources used across tests live in `samples/` at the crate root and are loaded
//!     through [Samples]. Prefer a sample over an ad-hoc string whenever a test is about a
//!     realistic shader; keep inline strings for the small constructs a test is about.
//!
//!     ```rust,ignore
//!     use glsl_mode::glsl::testing::{Samples, categories};
//!
//!     let source = Samples::fragment_basic();
//!     let cats = categories(&GlslMode::glsl(), &source);
//!     ```

use crate::glsl::highlight::lex_source;
use crate::glsl::mode::{GlslMode, LexState};
use crate::glsl::token::TokenCategory;
use std::fs;
use std::path::PathBuf;

/// Loader for the shader samples in `samples/`.
pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
    }

    /// Read a sample by file name. Panics when missing: a missing sample is a broken test.
    pub fn load(name: &str) -> String {
        let path = Samples::dir().join(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read sample {}: {}", path.display(), e))
    }

    /// Every sample file name, sorted.
    pub fn all() -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(Samples::dir())
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .filter(|name| name.ends_with(".glsl"))
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn fragment_basic() -> String {
        Samples::load("010-fragment-basic.glsl")
    }

    pub fn preprocessor() -> String {
        Samples::load("020-preprocessor.glsl")
    }

    pub fn nested_blocks() -> String {
        Samples::load("030-nested-blocks.glsl")
    }

    pub fn comments_and_strings() -> String {
        Samples::load("040-comments-and-strings.glsl")
    }
}

/// Categories of every token in `source`, in order, lexed from a fresh state.
pub fn categories(mode: &GlslMode, source: &str) -> Vec<TokenCategory> {
    let (lines, _) = lex_source(mode, source);
    lines
        .into_iter()
        .flat_map(|line| line.tokens)
        .map(|token| token.category)
        .collect()
}

/// `(category, text)` for every token in `source`.
pub fn classified(mode: &GlslMode, source: &str) -> Vec<(TokenCategory, String)> {
    let (lines, _) = lex_source(mode, source);
    lines
        .into_iter()
        .flat_map(|line| line.tokens)
        .map(|token| (token.category, token.text))
        .collect()
}

/// State after lexing `source` from a fresh state.
pub fn state_after(mode: &GlslMode, source: &str) -> LexState {
    lex_source(mode, source).1
}

/// Indentation proposed for `next_line` after lexing `source`.
pub fn indent_after(mode: &GlslMode, source: &str, next_line: &str) -> usize {
    mode.indent(&state_after(mode, source), next_line)
}
