//! Quoted literal sub-state
//!
//!     Entered after an opening `"` or `'`. Reads until the same quote appears unescaped. The
//!     escape flag toggles: `\\` escapes itself, so the quote after it closes the string.
//!
//!     When the line ends first, the sub-state drops back to base unless multi-line strings
//!     are enabled or the last character was an escaping backslash. The text read so far is
//!     still a string token either way.

use super::SubState;
use crate::glsl::stream::StringStream;
use crate::glsl::token::{Lexed, TokenCategory};

pub fn token_string(
    stream: &mut StringStream<'_>,
    sub_state: &mut SubState,
    quote: char,
    multi_line_strings: bool,
) -> Lexed {
    let mut escaped = false;
    let mut end = false;
    while let Some(next) = stream.next() {
        if next == quote && !escaped {
            end = true;
            break;
        }
        escaped = !escaped && next == '\\';
    }
    if end || !(escaped || multi_line_strings) {
        *sub_state = SubState::Base;
    }
    Lexed::new(TokenCategory::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(body: &str, multi_line: bool) -> (String, SubState) {
        let mut stream = StringStream::new(body, 4);
        let mut sub_state = SubState::InString { quote: '"' };
        let lexed = token_string(&mut stream, &mut sub_state, '"', multi_line);
        assert_eq!(lexed.category, TokenCategory::String);
        (stream.current().to_string(), sub_state)
    }

    #[test]
    fn test_stops_at_closing_quote() {
        let (text, sub_state) = run("abc\" + 1", false);
        assert_eq!(text, "abc\"");
        assert_eq!(sub_state, SubState::Base);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let (text, sub_state) = run(r#"a\"b" tail"#, false);
        assert_eq!(text, r#"a\"b""#);
        assert_eq!(sub_state, SubState::Base);
    }

    #[test]
    fn test_double_backslash_then_quote_closes() {
        let (text, _) = run(r#"a\\" tail"#, false);
        assert_eq!(text, r#"a\\""#);
    }

    #[test]
    fn test_unterminated_resets_without_multiline() {
        let (_, sub_state) = run("never closed", false);
        assert_eq!(sub_state, SubState::Base);
    }

    #[test]
    fn test_unterminated_continues_with_multiline() {
        let (_, sub_state) = run("never closed", true);
        assert_eq!(sub_state, SubState::InString { quote: '"' });
    }

    #[test]
    fn test_trailing_backslash_continues() {
        let (_, sub_state) = run("continued \\", false);
        assert_eq!(sub_state, SubState::InString { quote: '"' });
    }

    #[test]
    fn test_other_quote_kind_is_content() {
        let (text, sub_state) = run("it's\"", false);
        assert_eq!(text, "it's\"");
        assert_eq!(sub_state, SubState::Base);
    }
}
