//! Hook strategies
//!
//!     A hook is a stateless function registered for a trigger character. When the base
//!     dispatcher meets that character it consumes it and hands the stream to the hook. The
//!     hook either claims the token by returning a category, or declines with None, in which
//!     case the dispatcher rewinds and lexes the character normally.
//!
//!     Hooks see the lexer state read-only. Built-in strategies are named by [HookKind] so that
//!     configuration files can refer to them.

use crate::glsl::mode::LexState;
use crate::glsl::stream::StringStream;
use crate::glsl::token::TokenCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Signature of a hook strategy. The trigger character has already been consumed.
pub type HookFn = fn(&mut StringStream<'_>, &LexState) -> Option<TokenCategory>;

/// Directive lines: the trigger as first token of a line claims the rest of the line as meta.
pub fn preprocessor(stream: &mut StringStream<'_>, state: &LexState) -> Option<TokenCategory> {
    if !state.start_of_line() {
        return None;
    }
    stream.skip_to_end();
    Some(TokenCategory::Meta)
}

/// Named built-in hook strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    Preprocessor,
}

impl HookKind {
    pub fn strategy(self) -> HookFn {
        match self {
            HookKind::Preprocessor => preprocessor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HookKind::Preprocessor => "preprocessor",
        }
    }

    pub fn from_name(name: &str) -> Option<HookKind> {
        match name {
            "preprocessor" => Some(HookKind::Preprocessor),
            _ => None,
        }
    }
}

/// Trigger character to hook strategy.
#[derive(Clone, Default)]
pub struct HookTable {
    hooks: BTreeMap<char, HookFn>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `#` lines are preprocessor directives.
    pub fn glsl() -> Self {
        let mut table = HookTable::new();
        table.insert('#', preprocessor);
        table
    }

    pub fn insert(&mut self, trigger: char, hook: HookFn) -> Option<HookFn> {
        self.hooks.insert(trigger, hook)
    }

    pub fn insert_kind(&mut self, trigger: char, kind: HookKind) -> Option<HookFn> {
        self.insert(trigger, kind.strategy())
    }

    pub fn remove(&mut self, trigger: char) -> Option<HookFn> {
        self.hooks.remove(&trigger)
    }

    pub fn get(&self, trigger: char) -> Option<HookFn> {
        self.hooks.get(&trigger).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = char> + '_ {
        self.hooks.keys().copied()
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.triggers()).finish()
    }
}
