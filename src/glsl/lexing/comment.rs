//! Block comment sub-state
//!
//!     Entered after `/*`. Reads until a `/` directly preceded by `*`, remembering only the
//!     previous character. The lookback does not carry over between calls, so a `*` ending
//!     one line and a `/` starting the next do not close the comment.

use super::SubState;
use crate::glsl::stream::StringStream;
use crate::glsl::token::{Lexed, TokenCategory};

pub fn token_comment(stream: &mut StringStream<'_>, sub_state: &mut SubState) -> Lexed {
    let mut maybe_end = false;
    while let Some(ch) = stream.next() {
        if ch == '/' && maybe_end {
            *sub_state = SubState::Base;
            break;
        }
        maybe_end = ch == '*';
    }
    Lexed::new(TokenCategory::Comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closes_on_star_slash() {
        let mut stream = StringStream::new(" a { b */ c", 4);
        let mut sub_state = SubState::InComment;
        let lexed = token_comment(&mut stream, &mut sub_state);
        assert_eq!(lexed.category, TokenCategory::Comment);
        assert_eq!(stream.current(), " a { b */");
        assert_eq!(sub_state, SubState::Base);
    }

    #[test]
    fn test_stays_open_to_line_end() {
        let mut stream = StringStream::new("still inside *", 4);
        let mut sub_state = SubState::InComment;
        token_comment(&mut stream, &mut sub_state);
        assert!(stream.eol());
        assert_eq!(sub_state, SubState::InComment);
    }

    #[test]
    fn test_does_not_nest() {
        let mut stream = StringStream::new("/* inner */ outer */", 4);
        let mut sub_state = SubState::InComment;
        token_comment(&mut stream, &mut sub_state);
        assert_eq!(stream.current(), "/* inner */");
        assert_eq!(sub_state, SubState::Base);
    }

    #[test]
    fn test_lookback_resets_per_call() {
        let mut sub_state = SubState::InComment;
        let mut first = StringStream::new("ends with *", 4);
        token_comment(&mut first, &mut sub_state);
        let mut second = StringStream::new("/ not closed", 4);
        token_comment(&mut second, &mut sub_state);
        assert_eq!(sub_state, SubState::InComment);
    }
}
