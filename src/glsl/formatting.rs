//! Re-indentation
//!
//!     Rewrites the leading whitespace of every line with the indentation the mode proposes,
//!     the way an editor does when the user re-indents a whole selection. Each line is lexed
//!     after it has been re-indented, so the columns recorded on the context stack are the new
//!     ones.
//!
//!     Lines that start inside a block comment or an open string are copied verbatim, blank
//!     lines become empty, and everything after the leading whitespace is kept as is, including
//!     each line's `\n` or `\r\n` terminator.

use crate::glsl::highlight::lex_line;
use crate::glsl::mode::GlslMode;
use log::debug;

pub fn reindent(mode: &GlslMode, source: &str) -> String {
    let mut state = mode.start_state(0);
    let mut out = String::with_capacity(source.len());

    for (number, chunk) in source.split_inclusive('\n').enumerate() {
        let (line, ending) = split_ending(chunk);
        let content = line.trim_start();
        let rewritten = if state.in_literal() {
            line.to_string()
        } else if content.is_empty() {
            String::new()
        } else {
            let column = mode.indent(&state, content);
            debug!("line {}: indent {}", number, column);
            format!("{}{}", " ".repeat(column), content)
        };
        lex_line(mode, &rewritten, &mut state);
        out.push_str(&rewritten);
        out.push_str(ending);
    }
    out
}

/// Split a line from its terminator (`\n`, `\r\n`, or nothing on the last line).
fn split_ending(chunk: &str) -> (&str, &str) {
    let body = chunk
        .strip_suffix("\r\n")
        .or_else(|| chunk.strip_suffix('\n'))
        .unwrap_or(chunk);
    chunk.split_at(body.len())
}
