//! Property-based tests for the tokenizer, the indentation engine and the incremental buffer
//!
//! Arbitrary lines must never stall the tokenizer, generated balanced programs must unwind to
//! the root context, and incremental re-lexing must agree with lexing from scratch.

use glsl_mode::glsl::buffer::LexedBuffer;
use glsl_mode::glsl::formatting::reindent;
use glsl_mode::glsl::highlight::lex_source;
use glsl_mode::glsl::testing::state_after;
use glsl_mode::GlslMode;
use proptest::prelude::*;

/// Lines of shader-like text, balanced or not.
fn code_line_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("void main() {"),
        Just("}"),
        Just("};"),
        Just("if (x)"),
        Just("else"),
        Just("for (int i = 0; i < 4; i++)"),
        Just("x = foo(a,"),
        Just("b);"),
        Just("v[i] = 1.0;"),
        Just("#define N 4"),
        Just("/* open"),
        Just("close */"),
        Just("// { ( ["),
        Just("\"str"),
        Just("'c' ;"),
        Just(")"),
        Just("]"),
        Just("case 1:"),
    ];
    ("[ \t]{0,6}", piece).prop_map(|(lead, piece)| format!("{}{}", lead, piece))
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(code_line_strategy(), 0..24).prop_map(|lines| lines.join("\n"))
}

fn expression_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x = 1.0".to_string()),
        Just("total += lights[i].color * d".to_string()),
        Just("y = max(dot(n, l), 0.0)".to_string()),
        Just("f(a, (b + c) * [1][0])".to_string()),
        Just("s = \"}\"".to_string()),
        Just("c = a > b ? a : b".to_string()),
        Just("gl_FragColor = vec4(0.5) /* { */".to_string()),
    ]
}

/// Statements as they appear inside a function body. Brace-less bodies may nest, which leaves
/// statements open until the enclosing `}`.
fn statement_strategy() -> impl Strategy<Value = String> {
    let leaf = expression_strategy().prop_map(|expr| format!("{};", expr));
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|body| format!("if (c)\n{}", body)),
            (inner.clone(), inner.clone())
                .prop_map(|(then, other)| format!("if (c) {}\nelse {}", then, other)),
            inner
                .clone()
                .prop_map(|body| format!("for (int i = 0; i < 4; i++) {}", body)),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|body| format!("while (c) {{\n{}\n}}", body.join("\n"))),
            prop::collection::vec(inner, 0..4)
                .prop_map(|body| format!("{{ {} }}", body.join(" "))),
        ]
    })
}

/// Top level declarations: terminated globals and function definitions.
fn program_strategy() -> impl Strategy<Value = String> {
    let declaration = prop_oneof![
        Just("uniform vec3 light;".to_string()),
        Just("#version 330".to_string()),
        Just("float scale = 2.0;".to_string()),
        prop::collection::vec(statement_strategy(), 0..5)
            .prop_map(|body| format!("vec3 shade(vec3 n, float k) {{\n{}\n}}", body.join("\n"))),
    ];
    prop::collection::vec(declaration, 0..5).prop_map(|decls| decls.join("\n"))
}

fn buffer_text(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn assert_same_buffer(incremental: &LexedBuffer, fresh: &LexedBuffer) {
    assert_eq!(incremental.line_count(), fresh.line_count());
    for index in 0..fresh.line_count() {
        assert_eq!(incremental.state_before(index), fresh.state_before(index));
        assert_eq!(incremental.tokens(index), fresh.tokens(index));
    }
    assert_eq!(incremental.end_state(), fresh.end_state());
}

proptest! {
    #[test]
    fn test_every_call_makes_progress(line in "[ \t]{0,3}\\PC{0,40}") {
        let mode = GlslMode::glsl();
        let mut state = mode.start_state(0);
        let mut stream = mode.stream(&line);
        while !stream.eol() {
            let before = stream.pos();
            mode.token(&mut stream, &mut state);
            prop_assert!(stream.pos() > before);
        }
    }

    #[test]
    fn test_lexing_is_deterministic(source in source_strategy()) {
        let mode = GlslMode::glsl();
        prop_assert_eq!(lex_source(&mode, &source), lex_source(&mode, &source));
    }

    #[test]
    fn test_balanced_programs_unwind_to_root(program in program_strategy()) {
        let mode = GlslMode::glsl();
        let state = state_after(&mode, &program);
        prop_assert!(state.context().is_root(), "{:?}", state.context().kinds());
    }

    #[test]
    fn test_reindent_is_idempotent(source in source_strategy()) {
        let mode = GlslMode::glsl();
        let once = reindent(&mode, &source);
        prop_assert_eq!(reindent(&mode, &once), once);
    }

    #[test]
    fn test_reindent_keeps_line_content(program in program_strategy()) {
        let mode = GlslMode::glsl();
        let formatted = reindent(&mode, &program);
        let before: Vec<&str> = program.lines().map(str::trim_start).collect();
        let after: Vec<&str> = formatted.lines().map(str::trim_start).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_new_buffer_matches_source_lexing(
        lines in prop::collection::vec(code_line_strategy(), 0..16),
    ) {
        let mode = GlslMode::glsl();
        let text = buffer_text(&lines);
        let buffer = LexedBuffer::new(mode.clone(), &text);
        let (lexed, end_state) = lex_source(&mode, &text);
        prop_assert_eq!(buffer.line_count(), lexed.len());
        for line in &lexed {
            prop_assert_eq!(buffer.tokens(line.number).unwrap(), line.tokens.as_slice());
        }
        prop_assert_eq!(buffer.end_state(), &end_state);
    }

    #[test]
    fn test_replace_line_matches_full_relex(
        lines in prop::collection::vec(code_line_strategy(), 1..16),
        at in any::<prop::sample::Index>(),
        replacement in code_line_strategy(),
    ) {
        let mode = GlslMode::glsl();
        let index = at.index(lines.len());
        let mut buffer = LexedBuffer::new(mode.clone(), &buffer_text(&lines));
        buffer.replace_line(index, &replacement).unwrap();

        let mut edited = lines.clone();
        edited[index] = replacement;
        assert_same_buffer(&buffer, &LexedBuffer::new(mode, &buffer_text(&edited)));
    }

    #[test]
    fn test_insert_and_remove_match_full_relex(
        lines in prop::collection::vec(code_line_strategy(), 1..16),
        at in any::<prop::sample::Index>(),
        inserted in code_line_strategy(),
    ) {
        let mode = GlslMode::glsl();
        let mut buffer = LexedBuffer::new(mode.clone(), &buffer_text(&lines));

        let index = at.index(lines.len() + 1);
        buffer.insert_line(index, &inserted).unwrap();
        let mut edited = lines.clone();
        edited.insert(index, inserted);
        assert_same_buffer(&buffer, &LexedBuffer::new(mode.clone(), &buffer_text(&edited)));

        let removed = at.index(edited.len());
        buffer.remove_line(removed).unwrap();
        edited.remove(removed);
        assert_same_buffer(&buffer, &LexedBuffer::new(mode, &buffer_text(&edited)));
    }
}
