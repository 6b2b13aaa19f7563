//! Line cursor
//!
//!     The tokenizer never sees a whole buffer. It is handed one line at a time, wrapped in a
//!     StringStream, and asked to consume at least one character per call. The stream keeps
//!     two byte offsets into the line: `start` (where the token being produced began) and
//!     `pos` (how far it has read). Everything between the two is the current token text.
//!
//!     Columns are display columns, with tabs expanded to the next multiple of `tab_size`.
//!     Positions are byte offsets and always sit on char boundaries.

/// Count the display column reached at byte `end` of `text`.
pub fn count_column(text: &str, end: usize, tab_size: usize) -> usize {
    let mut column = 0;
    for (idx, ch) in text.char_indices() {
        if idx >= end {
            break;
        }
        if ch == '\t' && tab_size > 0 {
            column += tab_size - column % tab_size;
        } else {
            column += 1;
        }
    }
    column
}

/// A cursor over a single line of source text.
#[derive(Debug, Clone)]
pub struct StringStream<'a> {
    line: &'a str,
    pos: usize,
    start: usize,
    tab_size: usize,
}

impl<'a> StringStream<'a> {
    pub fn new(line: &'a str, tab_size: usize) -> Self {
        StringStream {
            line,
            pos: 0,
            start: 0,
            tab_size,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// True when nothing on the line has been read yet.
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// True when the whole line has been read.
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Mark the current position as the beginning of the next token.
    pub fn start_token(&mut self) {
        self.start = self.pos;
    }

    /// The unread remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds. Returns whether anything was consumed.
    pub fn eat_while<F>(&mut self, mut pred: F) -> bool
    where
        F: FnMut(char) -> bool,
    {
        let begin = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos > begin
    }

    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Advance by `bytes`, clamped to the line length.
    pub fn advance(&mut self, bytes: usize) {
        self.pos = self.pos.saturating_add(bytes).min(self.line.len());
    }

    /// Step back over `count` characters, never past the token start.
    pub fn back_up(&mut self, count: usize) {
        for _ in 0..count {
            if self.pos <= self.start {
                break;
            }
            match self.line[self.start..self.pos].chars().next_back() {
                Some(ch) => self.pos -= ch.len_utf8(),
                None => break,
            }
        }
    }

    /// Return to the start of the current token.
    pub fn rewind(&mut self) {
        self.pos = self.start;
    }

    /// Text of the token being produced.
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Display column where the current token starts.
    pub fn column(&self) -> usize {
        count_column(self.line, self.start, self.tab_size)
    }

    /// Display width of the line's leading whitespace.
    pub fn indentation(&self) -> usize {
        let end = self.line.len() - self.line.trim_start().len();
        count_column(self.line, end, self.tab_size)
    }
}
