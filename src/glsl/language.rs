//! Language registration
//!
//! Descriptive metadata a host needs to offer the mode: display name, the mode names it is
//! registered under, file extensions and comment delimiters. None of it is consumed by the
//! engine itself.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDefinition {
    pub id: String,
    pub name: String,
    /// Mode name followed by its MIME type.
    pub modes: Vec<String>,
    pub file_extensions: Vec<String>,
    pub line_comment: Option<String>,
    pub block_comment: Option<(String, String)>,
}

impl LanguageDefinition {
    pub fn glsl() -> Self {
        LanguageDefinition {
            id: "glsl".to_string(),
            name: "GLSL".to_string(),
            modes: vec!["glsl".to_string(), "text/x-glsl".to_string()],
            file_extensions: vec!["glsl".to_string()],
            line_comment: Some("//".to_string()),
            block_comment: Some(("/*".to_string(), "*/".to_string())),
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.modes.get(1).map(String::as_str)
    }

    /// Extension match is case-insensitive.
    pub fn handles_extension(&self, extension: &str) -> bool {
        self.file_extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    }
}

/// Languages known to a host, by id.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, LanguageDefinition>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the GLSL definition.
    pub fn with_glsl() -> Self {
        let mut registry = LanguageRegistry::new();
        registry.register(LanguageDefinition::glsl());
        registry
    }

    /// Register a language. A language with the same id is replaced.
    pub fn register(&mut self, language: LanguageDefinition) {
        self.languages.insert(language.id.clone(), language);
    }

    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        self.languages.get(id)
    }

    pub fn for_extension(&self, extension: &str) -> Option<&LanguageDefinition> {
        let extension = extension.trim_start_matches('.');
        self.languages
            .values()
            .find(|language| language.handles_extension(extension))
    }

    pub fn for_path(&self, path: impl AsRef<Path>) -> Option<&LanguageDefinition> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.for_extension(extension)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }
}
