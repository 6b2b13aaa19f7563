//! Indentation engine
//!
//!     Indentation is driven by a stack of contexts (see [context]). Every token the tokenizer
//!     produces, except comments and directives, may push or pop contexts depending on its
//!     signal. When the host asks how far a new line should be indented, the answer comes from
//!     the innermost context alone; earlier lines are never re-read.
//!
//! Update Rules
//!
//!     Applied per token, first match wins, always against the context on top before the token:
//!
//!         1. `;` or `:` with a statement on top: pop it (the statement ended).
//!         2. `{`, `[` or `(`: push a bracket context at the token's column.
//!         3. `}`: pop trailing statements, pop the brace context if it is on top, then pop the
//!            statements that were waiting on that brace. A closing brace therefore dedents
//!            past every implicit statement level opened inside it.
//!         4. `)` or `]` matching the top context: pop it.
//!         5. Top is a brace or the root, or top is a statement and the token is a
//!            block-introducing keyword: push an implicit statement at the token's column.
//!
//!     Popping a bracket context restores the line indentation it recorded, so the rest of the
//!     line behaves as if it were indented like the opener's line.
//!
//! Alignment
//!
//!     A context is aligned when something followed its opener on the same line, as in
//!     `foo(a,` where continuation lines line up under `a`. The flag is settled at two points:
//!     the first call on each line sets an unknown flag to false, and the first significant
//!     token after the opener sets an unknown flag to true.
//!
//! Computing Indentation
//!
//!     Given the first character `c` of the pending line:
//!
//!         - statement on top: its line indentation, plus one unit unless `c` is `{`
//!         - aligned context: its column plus one, or exactly its column if `c` closes it
//!         - otherwise: its line indentation, plus one unit unless `c` closes it

pub mod context;

pub use context::{Context, ContextKind, ContextStack};

use crate::glsl::token::{Closer, Signal};
use log::trace;

fn push_context(stack: &mut ContextStack, indented: usize, column: usize, kind: ContextKind) {
    trace!("push {:?} at column {} (line indented {})", kind, column, indented);
    stack.push(Context::new(indented as isize, column, kind));
}

/// Pop the top context, restoring `indented` when it was a bracket. Returns the new top kind.
fn pop_context(stack: &mut ContextStack, indented: &mut usize) -> ContextKind {
    if let Some(popped) = stack.pop() {
        trace!("pop {:?}", popped.kind);
        if popped.kind.is_block() {
            *indented = usize::try_from(popped.indented).unwrap_or(0);
        }
    }
    stack.top().kind
}

/// Update the stack for one significant token.
///
/// `indented` is the current line's indentation and `column` the token's start column.
pub fn apply_signal(
    stack: &mut ContextStack,
    indented: &mut usize,
    signal: Option<Signal>,
    column: usize,
) {
    let top = stack.top().kind;
    match signal {
        Some(signal) if signal.ends_statement() && top == ContextKind::Statement => {
            pop_context(stack, indented);
        }
        Some(Signal::Open(closer)) => {
            push_context(stack, *indented, column, ContextKind::Block(closer));
        }
        Some(Signal::Close(Closer::Brace)) => {
            let mut kind = top;
            while kind == ContextKind::Statement {
                kind = pop_context(stack, indented);
            }
            if kind == ContextKind::Block(Closer::Brace) {
                kind = pop_context(stack, indented);
            }
            while kind == ContextKind::Statement {
                kind = pop_context(stack, indented);
            }
        }
        Some(Signal::Close(closer)) if top == ContextKind::Block(closer) => {
            pop_context(stack, indented);
        }
        _ if opens_statement(top, signal) => {
            push_context(stack, *indented, column, ContextKind::Statement);
        }
        _ => {}
    }
}

fn opens_statement(top: ContextKind, signal: Option<Signal>) -> bool {
    match top {
        ContextKind::Top | ContextKind::Block(Closer::Brace) => true,
        ContextKind::Statement => signal == Some(Signal::NewStatement),
        ContextKind::Block(_) => false,
    }
}

/// Indentation for a line whose first significant character is `first_char`.
pub fn indentation(stack: &ContextStack, first_char: Option<char>, indent_unit: usize) -> usize {
    let context = stack.top();
    let unit = indent_unit as isize;
    let closing = first_char.is_some() && first_char == context.kind.closing_char();
    let column = if context.kind == ContextKind::Statement {
        context.indented + if first_char == Some('{') { 0 } else { unit }
    } else if context.align == Some(true) {
        context.column as isize + if closing { 0 } else { 1 }
    } else {
        context.indented + if closing { 0 } else { unit }
    };
    usize::try_from(column).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(stack: &mut ContextStack, indented: &mut usize, punct: char, column: usize) {
        let signal = Signal::from_punctuation(punct);
        stack.settle_align(true);
        apply_signal(stack, indented, signal, column);
    }

    #[test]
    fn test_brace_pops_statements_on_both_sides() {
        let mut stack = ContextStack::new(-2);
        let mut indented = 0;
        // `if` opens a statement, `{` nests inside it, `x` opens another statement
        apply_signal(&mut stack, &mut indented, Some(Signal::NewStatement), 0);
        apply(&mut stack, &mut indented, '{', 7);
        apply_signal(&mut stack, &mut indented, None, 9);
        assert_eq!(stack.depth(), 4);
        apply(&mut stack, &mut indented, '}', 11);
        assert!(stack.is_root());
    }

    #[test]
    fn test_paren_only_pops_matching_context() {
        let mut stack = ContextStack::new(-2);
        let mut indented = 0;
        apply(&mut stack, &mut indented, '(', 0);
        apply(&mut stack, &mut indented, ']', 1);
        assert_eq!(stack.top().kind, ContextKind::Block(Closer::Paren));
        apply(&mut stack, &mut indented, ')', 2);
        assert!(stack.is_root());
    }

    #[test]
    fn test_semicolon_without_statement_opens_one() {
        let mut stack = ContextStack::new(-2);
        let mut indented = 0;
        apply(&mut stack, &mut indented, ';', 0);
        assert_eq!(stack.top().kind, ContextKind::Statement);
    }

    #[test]
    fn test_no_statement_inside_parens() {
        let mut stack = ContextStack::new(-2);
        let mut indented = 0;
        apply(&mut stack, &mut indented, '(', 0);
        apply_signal(&mut stack, &mut indented, None, 1);
        apply_signal(&mut stack, &mut indented, Some(Signal::NewStatement), 3);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_pop_restores_line_indentation() {
        let mut stack = ContextStack::new(-2);
        let mut indented = 4;
        apply(&mut stack, &mut indented, '{', 4);
        indented = 8;
        apply(&mut stack, &mut indented, '}', 8);
        assert_eq!(indented, 4);
    }

    #[test]
    fn test_indentation_rules() {
        let mut stack = ContextStack::new(-2);
        assert_eq!(indentation(&stack, Some('x'), 2), 0);

        stack.push(Context::new(4, 10, ContextKind::Block(Closer::Paren)));
        assert_eq!(indentation(&stack, Some('x'), 2), 6);
        assert_eq!(indentation(&stack, Some(')'), 2), 4);

        stack.settle_align(true);
        assert_eq!(indentation(&stack, Some('x'), 2), 11);
        assert_eq!(indentation(&stack, Some(')'), 2), 10);

        stack.push(Context::new(4, 12, ContextKind::Statement));
        assert_eq!(indentation(&stack, Some('x'), 2), 6);
        assert_eq!(indentation(&stack, Some('{'), 2), 4);
        assert_eq!(indentation(&stack, None, 2), 6);
    }

    #[test]
    fn test_base_column_offsets_root() {
        let stack = ContextStack::new(8 - 4);
        assert_eq!(indentation(&stack, Some('v'), 4), 8);
    }
}
