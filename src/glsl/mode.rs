//! GLSL mode
//!
//!     The public face of the engine, shaped after what an editor host expects from a language
//!     mode:
//!
//!         start_state(base_column):
//!             A fresh [LexState]: base sub-state and a context stack holding only the root.
//!             The root sits one indent unit below `base_column`, so top level lines indent to
//!             `base_column` (useful when the language is embedded in another one).
//!
//!         token(stream, state):
//!             Consumes one token from the stream, updates the state, and returns the token's
//!             category. Whitespace runs are consumed as their own call and yield None.
//!
//!         indent(state, text_after):
//!             Column for the next line, from the state alone. Does not touch any stream.
//!
//!     A state belongs to one lexing pass. It is cheap to clone, which is how hosts keep
//!     per-line checkpoints for re-lexing after edits (see [buffer](crate::glsl::buffer)).

use crate::glsl::grammar::Grammar;
use crate::glsl::indentation::{self, ContextStack};
use crate::glsl::lexing::{self, HookTable, SubState};
use crate::glsl::stream::StringStream;
use crate::glsl::token::{Lexed, TokenCategory};

/// Characters that should trigger re-indentation of the line they are typed on.
pub const ELECTRIC_CHARS: &str = "{}";

/// Mode configuration. Every field can be overridden independently.
#[derive(Debug, Clone)]
pub struct ModeConfig {
    /// Columns per nesting level.
    pub indent_unit: usize,
    /// Tab width used when computing columns.
    pub tab_size: usize,
    /// Whether an unterminated string continues on the next line.
    pub multi_line_strings: bool,
    pub grammar: Grammar,
    pub hooks: HookTable,
}

impl ModeConfig {
    /// Plain C-like configuration with no identifier tables and no hooks.
    pub fn bare() -> Self {
        ModeConfig {
            grammar: Grammar::empty(),
            hooks: HookTable::new(),
            ..ModeConfig::default()
        }
    }

    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_multi_line_strings(mut self, enabled: bool) -> Self {
        self.multi_line_strings = enabled;
        self
    }

    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_hooks(mut self, hooks: HookTable) -> Self {
        self.hooks = hooks;
        self
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        ModeConfig {
            indent_unit: 2,
            tab_size: 4,
            multi_line_strings: false,
            grammar: Grammar::glsl(),
            hooks: HookTable::glsl(),
        }
    }
}

/// State carried between tokenizer calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexState {
    pub(crate) tokenize: SubState,
    pub(crate) context: ContextStack,
    pub(crate) indented: usize,
    pub(crate) start_of_line: bool,
}

impl LexState {
    pub fn sub_state(&self) -> SubState {
        self.tokenize
    }

    pub fn context(&self) -> &ContextStack {
        &self.context
    }

    /// Indentation of the line being lexed.
    pub fn indented(&self) -> usize {
        self.indented
    }

    /// True until the first significant token of the current line.
    pub fn start_of_line(&self) -> bool {
        self.start_of_line
    }

    /// True when the next line starts inside a comment or string.
    pub fn in_literal(&self) -> bool {
        self.tokenize.is_literal()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GlslMode {
    config: ModeConfig,
}

impl GlslMode {
    pub fn new(config: ModeConfig) -> Self {
        GlslMode { config }
    }

    /// The mode with the built-in GLSL tables and `#` directives.
    pub fn glsl() -> Self {
        GlslMode::default()
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// A stream over `line` using this mode's tab size.
    pub fn stream<'a>(&self, line: &'a str) -> StringStream<'a> {
        StringStream::new(line, self.config.tab_size)
    }

    pub fn start_state(&self, base_column: usize) -> LexState {
        LexState {
            tokenize: SubState::Base,
            context: ContextStack::new(base_column as isize - self.config.indent_unit as isize),
            indented: 0,
            start_of_line: true,
        }
    }

    /// Advance the stream by one token and return its category.
    pub fn token(
        &self,
        stream: &mut StringStream<'_>,
        state: &mut LexState,
    ) -> Option<TokenCategory> {
        self.lex(stream, state).map(|lexed| lexed.category)
    }

    /// Like [token](Self::token), also reporting the token's signal.
    pub fn lex(&self, stream: &mut StringStream<'_>, state: &mut LexState) -> Option<Lexed> {
        if stream.sol() {
            state.context.settle_align(false);
            state.indented = stream.indentation();
            state.start_of_line = true;
        }
        stream.start_token();
        if stream.eat_space() {
            return None;
        }

        let lexed = lexing::tokenize(stream, state, &self.config);
        if lexed.category.is_transparent() {
            return Some(lexed);
        }

        state.context.settle_align(true);
        indentation::apply_signal(
            &mut state.context,
            &mut state.indented,
            lexed.signal,
            stream.column(),
        );
        state.start_of_line = false;
        Some(lexed)
    }

    /// Indentation column for a line whose content (after leading whitespace) is `text_after`.
    ///
    /// Lines that begin inside a comment or string get 0.
    pub fn indent(&self, state: &LexState, text_after: &str) -> usize {
        if state.in_literal() {
            return 0;
        }
        let first_char = text_after.trim_start().chars().next();
        indentation::indentation(&state.context, first_char, self.config.indent_unit)
    }

    pub fn electric_chars(&self) -> &'static str {
        ELECTRIC_CHARS
    }

    pub fn is_electric(&self, ch: char) -> bool {
        ELECTRIC_CHARS.contains(ch)
    }
}
