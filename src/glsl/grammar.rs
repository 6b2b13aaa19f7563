//! Grammar tables
//!
//!     Identifier classification is table driven. A Grammar carries four read-only tables:
//!     keywords, builtin functions, block-introducing keywords and atoms. Each table is any
//!     type implementing [WordTable], so hosts can plug in a HashSet, a WordSet built from a
//!     space separated list, or their own lookup.
//!
//!     Lookup priority is keyword > builtin > atom. Block keywords only matter for words that
//!     are keywords too: they make the tokenizer emit a NewStatement signal.
//!
//!     Tables are shared through Arc and never mutated after construction, so one Grammar can
//!     back any number of lexing passes at once. The GLSL tables are built once, lazily.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

/// Read-only membership test over identifier text.
pub trait WordTable: Send + Sync + fmt::Debug {
    fn contains(&self, word: &str) -> bool;
}

impl WordTable for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl WordTable for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// A set of words, usually built from a space separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from whitespace separated words. Repeated separators are ignored.
    pub fn from_words(list: &str) -> Self {
        list.split_whitespace().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSet {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordTable for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// How the grammar classifies a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Keyword { introduces_block: bool },
    Builtin,
    Atom,
}

/// The four identifier tables consulted by the tokenizer.
#[derive(Debug, Clone)]
pub struct Grammar {
    keywords: Arc<dyn WordTable>,
    builtins: Arc<dyn WordTable>,
    block_keywords: Arc<dyn WordTable>,
    atoms: Arc<dyn WordTable>,
}

impl Grammar {
    pub fn new(
        keywords: impl WordTable + 'static,
        builtins: impl WordTable + 'static,
        block_keywords: impl WordTable + 'static,
        atoms: impl WordTable + 'static,
    ) -> Self {
        Grammar {
            keywords: Arc::new(keywords),
            builtins: Arc::new(builtins),
            block_keywords: Arc::new(block_keywords),
            atoms: Arc::new(atoms),
        }
    }

    /// A grammar that recognizes nothing; every identifier is a plain word.
    pub fn empty() -> Self {
        Grammar::new(WordSet::new(), WordSet::new(), WordSet::new(), WordSet::new())
    }

    /// The built-in GLSL tables.
    pub fn glsl() -> Self {
        GLSL_GRAMMAR.clone()
    }

    pub fn with_keywords(mut self, table: impl WordTable + 'static) -> Self {
        self.keywords = Arc::new(table);
        self
    }

    pub fn with_builtins(mut self, table: impl WordTable + 'static) -> Self {
        self.builtins = Arc::new(table);
        self
    }

    pub fn with_block_keywords(mut self, table: impl WordTable + 'static) -> Self {
        self.block_keywords = Arc::new(table);
        self
    }

    pub fn with_atoms(mut self, table: impl WordTable + 'static) -> Self {
        self.atoms = Arc::new(table);
        self
    }

    pub fn classify(&self, word: &str) -> Option<WordClass> {
        if self.keywords.contains(word) {
            Some(WordClass::Keyword {
                introduces_block: self.block_keywords.contains(word),
            })
        } else if self.builtins.contains(word) {
            Some(WordClass::Builtin)
        } else if self.atoms.contains(word) {
            Some(WordClass::Atom)
        } else {
            None
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::glsl()
    }
}

pub const GLSL_KEYWORDS: &str = "attribute const uniform varying break continue \
    void bool int uint float double struct \
    vec2 vec3 vec4 dvec2 dvec3 dvec4 bvec2 bvec3 bvec4 ivec2 ivec3 ivec4 uvec2 uvec3 uvec4 \
    mat2 mat3 mat4 mat2x2 mat2x3 mat2x4 mat3x2 mat3x3 mat3x4 mat4x2 mat4x3 mat4x4 \
    dmat2 dmat3 dmat4 dmat2x2 dmat2x3 dmat2x4 dmat3x2 dmat3x3 dmat3x4 dmat4x2 dmat4x3 dmat4x4 \
    sampler1D sampler2D sampler3D samplerCube sampler2DRect sampler1DShadow sampler2DRectShadow \
    sampler1DArray sampler2DArray sampler1DArrayShadow sampler2DArrayShadow samplerBuffer \
    sampler2DMS sampler2DMSArray samplerCubeShadow samplerCubeArray samplerCubeArrayShadow \
    isampler1D isampler2D isampler3D isamplerCube isampler2DRect \
    isampler1DArray isampler2DArray isamplerBuffer isampler2DMS isampler2DMSArray \
    isamplerCubeArray \
    usampler1D usampler2D usampler3D usamplerCube usampler2DRect \
    usampler1DArray usampler2DArray usamplerBuffer usampler2DMS usampler2DMSArray \
    usamplerCubeArray \
    do for while if else in out inout true false \
    lowp mediump highp precision invariant discard return \
    gl_FragCoord gl_FrontFacing gl_ClipDistance gl_PointCoord gl_PrimitiveID gl_SampleID \
    gl_SamplePosition gl_FragColor gl_FragData gl_FragDepth gl_SampleMask";

pub const GLSL_BUILTINS: &str = "radians degrees sin cos tan asin acos atan pow \
    exp log exp2 log2 sqrt inversesqrt abs sign floor ceil fract mod \
    min max clamp mix step smoothstep length distance dot cross \
    normalize faceforward reflect refract matrixCompMult lessThan \
    lessThanEqual greaterThan greaterThanEqual equal notEqual any all \
    not dFdx dFdy fwidth texture2D texture2DProj texture2DLod \
    texture2DProjLod textureCube textureCubeLod";

pub const GLSL_BLOCK_KEYWORDS: &str = "case do else for if switch while struct";

pub const GLSL_ATOMS: &str = "null";

static GLSL_GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    Grammar::new(
        WordSet::from_words(GLSL_KEYWORDS),
        WordSet::from_words(GLSL_BUILTINS),
        WordSet::from_words(GLSL_BLOCK_KEYWORDS),
        WordSet::from_words(GLSL_ATOMS),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glsl_priority() {
        let grammar = Grammar::glsl();
        assert_eq!(
            grammar.classify("if"),
            Some(WordClass::Keyword {
                introduces_block: true
            })
        );
        assert_eq!(
            grammar.classify("vec4"),
            Some(WordClass::Keyword {
                introduces_block: false
            })
        );
        assert_eq!(grammar.classify("smoothstep"), Some(WordClass::Builtin));
        assert_eq!(grammar.classify("null"), Some(WordClass::Atom));
        assert_eq!(grammar.classify("myColor"), None);
    }

    #[test]
    fn test_block_keyword_needs_keyword() {
        // "case" and "switch" are block keywords but not keywords in the GLSL tables
        let grammar = Grammar::glsl();
        assert_eq!(grammar.classify("case"), None);
        assert_eq!(grammar.classify("switch"), None);
    }

    #[test]
    fn test_keyword_wins_over_builtin() {
        let grammar = Grammar::new(
            WordSet::from_words("dot"),
            WordSet::from_words("dot"),
            WordSet::new(),
            WordSet::from_words("dot"),
        );
        assert_eq!(
            grammar.classify("dot"),
            Some(WordClass::Keyword {
                introduces_block: false
            })
        );
    }

    #[test]
    fn test_word_set_skips_repeated_separators() {
        let set = WordSet::from_words("a  b\tc ");
        assert_eq!(set.len(), 3);
        assert!(!set.contains(""));
    }

    #[test]
    fn test_host_tables() {
        let keywords: HashSet<String> = ["kernel".to_string()].into_iter().collect();
        let grammar = Grammar::empty().with_keywords(keywords);
        assert!(matches!(
            grammar.classify("kernel"),
            Some(WordClass::Keyword { .. })
        ));
        assert_eq!(grammar.classify("if"), None);
    }
}
