//! Main module for glsl-mode functionality

pub mod buffer;
pub mod formatting;
pub mod grammar;
pub mod highlight;
pub mod indentation;
pub mod language;
pub mod lexing;
pub mod mode;
pub mod stream;
pub mod testing;
pub mod token;
