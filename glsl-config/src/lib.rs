//! Shared configuration loader for the GLSL mode and its tools.
//!
//! `defaults/glsl.default.toml` is embedded into every binary so that the documented defaults
//! and runtime behavior stay in sync. Applications layer user files on top of those defaults
//! via [`Loader`], deserialize into [`GlslConfig`] and turn the result into a
//! [`ModeConfig`] with [`GlslConfig::to_mode_config`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use glsl_mode::glsl::grammar::{Grammar, WordSet};
use glsl_mode::glsl::lexing::{HookKind, HookTable};
use glsl_mode::ModeConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/glsl.default.toml");

/// Hook value that disables a trigger set by an earlier layer.
pub const HOOK_DISABLED: &str = "none";

/// Top-level configuration consumed by GLSL applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GlslConfig {
    pub mode: ModeSettings,
    #[serde(default)]
    pub grammar: GrammarConfig,
    /// Trigger character to hook strategy name, or `none` to turn the trigger off.
    #[serde(default)]
    pub hooks: BTreeMap<String, String>,
    pub output: OutputConfig,
}

/// Mirrors the knobs of [`ModeConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct ModeSettings {
    pub indent_unit: usize,
    pub tab_size: usize,
    pub multi_line_strings: bool,
}

/// Replacement identifier tables. Each is a space-separated word list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrammarConfig {
    pub keywords: Option<String>,
    pub builtins: Option<String>,
    pub block_keywords: Option<String>,
    pub atoms: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Simple,
    Json,
}

impl GlslConfig {
    /// Build the mode configuration. Fails when a hook trigger is not a single character or
    /// names an unknown strategy.
    pub fn to_mode_config(&self) -> Result<ModeConfig, ConfigError> {
        let mut hooks = HookTable::new();
        for (trigger, name) in &self.hooks {
            let mut chars = trigger.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(ConfigError::Message(format!(
                        "hook trigger must be a single character, got {:?}",
                        trigger
                    )))
                }
            };
            if name == HOOK_DISABLED {
                continue;
            }
            let kind = HookKind::from_name(name).ok_or_else(|| {
                ConfigError::Message(format!(
                    "unknown hook strategy {:?} for {:?}",
                    name, trigger
                ))
            })?;
            hooks.insert_kind(ch, kind);
        }

        Ok(ModeConfig::default()
            .with_indent_unit(self.mode.indent_unit)
            .with_tab_size(self.mode.tab_size)
            .with_multi_line_strings(self.mode.multi_line_strings)
            .with_grammar(self.grammar.to_grammar())
            .with_hooks(hooks))
    }
}

impl GrammarConfig {
    /// The GLSL grammar with every configured table swapped in.
    pub fn to_grammar(&self) -> Grammar {
        let mut grammar = Grammar::glsl();
        if let Some(words) = &self.keywords {
            grammar = grammar.with_keywords(WordSet::from_words(words));
        }
        if let Some(words) = &self.builtins {
            grammar = grammar.with_builtins(WordSet::from_words(words));
        }
        if let Some(words) = &self.block_keywords {
            grammar = grammar.with_block_keywords(WordSet::from_words(words));
        }
        if let Some(words) = &self.atoms {
            grammar = grammar.with_atoms(WordSet::from_words(words));
        }
        grammar
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GlslConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GlslConfig, ConfigError> {
    Loader::new().build()
}
