//! Context stack
//!
//!     One context per open nesting level. The root `Top` context lives outside the vector of
//!     nested contexts, so the stack can never be empty and popping can never remove it.

use crate::glsl::token::Closer;
use serde::Serialize;

/// What opened a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContextKind {
    /// The permanent root.
    Top,
    /// Implicit level between statements that are not wrapped in brackets.
    Statement,
    /// An open bracket, named by the character that closes it.
    Block(Closer),
}

impl ContextKind {
    /// The character that closes this context, for bracket contexts.
    pub fn closing_char(self) -> Option<char> {
        match self {
            ContextKind::Block(closer) => Some(closer.close_char()),
            ContextKind::Top | ContextKind::Statement => None,
        }
    }

    pub fn is_block(self) -> bool {
        matches!(self, ContextKind::Block(_))
    }
}

/// One nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    /// Indentation of the line the context was opened on. Negative only for the root of a
    /// mode started at a base column smaller than the indent unit.
    pub indented: isize,
    /// Column of the opening token.
    pub column: usize,
    pub kind: ContextKind,
    /// Whether content followed the opener on its line. None until the next token is seen.
    pub align: Option<bool>,
}

impl Context {
    pub fn new(indented: isize, column: usize, kind: ContextKind) -> Self {
        Context {
            indented,
            column,
            kind,
            align: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextStack {
    root: Context,
    nested: Vec<Context>,
}

impl ContextStack {
    pub fn new(root_indented: isize) -> Self {
        ContextStack {
            root: Context {
                indented: root_indented,
                column: 0,
                kind: ContextKind::Top,
                align: Some(false),
            },
            nested: Vec::new(),
        }
    }

    pub fn top(&self) -> &Context {
        self.nested.last().unwrap_or(&self.root)
    }

    pub fn top_mut(&mut self) -> &mut Context {
        match self.nested.last_mut() {
            Some(context) => context,
            None => &mut self.root,
        }
    }

    pub fn push(&mut self, context: Context) {
        self.nested.push(context);
    }

    /// Pop the innermost context. The root stays; popping it returns None.
    pub fn pop(&mut self) -> Option<Context> {
        self.nested.pop()
    }

    /// Number of contexts including the root.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    pub fn is_root(&self) -> bool {
        self.nested.is_empty()
    }

    /// Contexts from the root outwards to the innermost.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        std::iter::once(&self.root).chain(self.nested.iter())
    }

    pub fn kinds(&self) -> Vec<ContextKind> {
        self.iter().map(|context| context.kind).collect()
    }

    /// Resolve the top context's alignment to `aligned` if it is still unknown.
    pub fn settle_align(&mut self, aligned: bool) {
        let top = self.top_mut();
        if top.align.is_none() {
            top.align = Some(aligned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = ContextStack::new(-2);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().kind, ContextKind::Top);
        assert_eq!(stack.top().align, Some(false));
    }

    #[test]
    fn test_push_and_pop() {
        let mut stack = ContextStack::new(0);
        stack.push(Context::new(0, 4, ContextKind::Block(Closer::Paren)));
        stack.push(Context::new(0, 5, ContextKind::Statement));
        assert_eq!(stack.depth(), 3);
        assert_eq!(
            stack.kinds(),
            vec![
                ContextKind::Top,
                ContextKind::Block(Closer::Paren),
                ContextKind::Statement
            ]
        );
        assert_eq!(stack.pop().map(|c| c.kind), Some(ContextKind::Statement));
        assert_eq!(stack.top().column, 4);
    }

    #[test]
    fn test_settle_align_only_once() {
        let mut stack = ContextStack::new(0);
        stack.push(Context::new(0, 0, ContextKind::Block(Closer::Brace)));
        stack.settle_align(true);
        stack.settle_align(false);
        assert_eq!(stack.top().align, Some(true));
    }

    #[test]
    fn test_closing_char() {
        assert_eq!(
            ContextKind::Block(Closer::Bracket).closing_char(),
            Some(']')
        );
        assert_eq!(ContextKind::Statement.closing_char(), None);
    }
}
