//! Base dispatch
//!
//!     The base tokenizer decides what the next lexeme is. First match wins:
//!
//!         1. A hook registered for the next character (e.g. `#` directives).
//!         2. A quote: switch to the string sub-state and let it read the literal.
//!         3. Structural punctuation `[ ] { } ( ) , ; : .`: bracket, with its signal.
//!         4. A digit: a run of word characters and dots, classified as number. No numeric
//!            validation is done, so `1.0e5`, `0x1F` and `2u` are all one token.
//!         5. `/*` enters the block comment sub-state; `//` takes the rest of the line.
//!         6. A run of operator characters `+ - * & % = < > ! ? | /`.
//!         7. Anything else: the character plus any following word characters, looked up in
//!            the grammar tables.
//!
//!     Lexeme shapes are recognized by a logos lexer run over the unread part of the line;
//!     only its first token is used. The operator pattern refuses a `/` followed by `*` or
//!     `/`, so the comment openers win exactly where the dispatch order says they should.

use super::{comment, string, SubState};
use crate::glsl::grammar::WordClass;
use crate::glsl::mode::{LexState, ModeConfig};
use crate::glsl::stream::StringStream;
use crate::glsl::token::{Lexed, Signal, TokenCategory};
use logos::Logos;

/// Lexeme shapes recognized in the base state.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    #[token("\"")]
    #[token("'")]
    Quote,

    #[regex(r"[\[\]{}(),;:.]")]
    Punctuation,

    #[regex(r"[0-9][A-Za-z0-9_.]*")]
    Number,

    #[token("/*")]
    BlockCommentOpen,

    #[token("//")]
    LineCommentOpen,

    #[regex(r"[+\-*&%=<>!?|][+\-*&%=<>!?|/]*")]
    #[regex(r"/([+\-&%=<>!?|][+\-*&%=<>!?|/]*)?")]
    Operator,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,
}

/// Characters that extend a word run.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

pub fn token_base(
    stream: &mut StringStream<'_>,
    state: &mut LexState,
    config: &ModeConfig,
) -> Lexed {
    if let Some(hook) = stream.peek().and_then(|ch| config.hooks.get(ch)) {
        stream.next();
        if let Some(category) = hook(stream, state) {
            return Lexed::new(category);
        }
        stream.rewind();
    }

    let mut lexer = Shape::lexer(stream.rest());
    let shape = match lexer.next() {
        Some(Ok(shape)) => shape,
        _ => return token_fallback(stream, config),
    };
    let lexeme = lexer.slice();
    stream.advance(lexeme.len());

    match shape {
        Shape::Quote => {
            let quote = lexeme.chars().next().unwrap_or('"');
            state.tokenize = SubState::InString { quote };
            string::token_string(
                stream,
                &mut state.tokenize,
                quote,
                config.multi_line_strings,
            )
        }
        Shape::Punctuation => match lexeme.chars().next().and_then(Signal::from_punctuation) {
            Some(signal) => Lexed::with_signal(TokenCategory::Bracket, signal),
            None => Lexed::new(TokenCategory::Bracket),
        },
        Shape::Number => Lexed::new(TokenCategory::Number),
        Shape::BlockCommentOpen => {
            state.tokenize = SubState::InComment;
            comment::token_comment(stream, &mut state.tokenize)
        }
        Shape::LineCommentOpen => {
            stream.skip_to_end();
            Lexed::new(TokenCategory::Comment)
        }
        Shape::Operator => Lexed::new(TokenCategory::Operator),
        Shape::Word => classify_word(stream.current(), config),
    }
}

/// Unrecognized character: take it and any word characters after it.
fn token_fallback(stream: &mut StringStream<'_>, config: &ModeConfig) -> Lexed {
    stream.next();
    stream.eat_while(is_word_char);
    classify_word(stream.current(), config)
}

fn classify_word(word: &str, config: &ModeConfig) -> Lexed {
    match config.grammar.classify(word) {
        Some(WordClass::Keyword {
            introduces_block: true,
        }) => Lexed::with_signal(TokenCategory::Keyword, Signal::NewStatement),
        Some(WordClass::Keyword { .. }) => Lexed::new(TokenCategory::Keyword),
        Some(WordClass::Builtin) => Lexed::new(TokenCategory::Builtin),
        Some(WordClass::Atom) => Lexed::new(TokenCategory::Atom),
        None => Lexed::new(TokenCategory::Word),
    }
}
