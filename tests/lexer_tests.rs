// tests/lexer_tests.rs

use ketupa_predicates::ast::Token;
use ketupa_predicates::lexer::{
    extract_variable_name, is_bracketed_expression, is_variable_reference,
    next_index_token, next_top_level_argument, trim_outer_brackets, unescape, Lexer,
};

// ============================================================================
// Token Classification
// ============================================================================

#[test]
fn test_structural_characters() {
    let test_cases = vec![
        (',', Token::ArgumentSeparator),
        ('{', Token::ExpressionStart),
        ('}', Token::ExpressionEnd),
        ('$', Token::VariableMarker),
        ('[', Token::IndexStart),
        (']', Token::IndexEnd),
        ('\\', Token::Escape),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Token::classify(input), expected, "Failed for input: {}", input);
        assert!(Token::classify(input).is_structural());
    }
}

#[test]
fn test_plain_characters() {
    for ch in ['a', 'Z', '0', ' ', '=', '<', '(', ')', 'é'] {
        assert_eq!(Token::classify(ch), Token::None, "Failed for input: {}", ch);
    }
}

// ============================================================================
// Shape Checks
// ============================================================================

#[test]
fn test_is_bracketed_expression() {
    assert!(is_bracketed_expression("{=, 1, 1}"));
    assert!(is_bracketed_expression("{}"));
    assert!(!is_bracketed_expression("{"));
    assert!(!is_bracketed_expression(""));
    assert!(!is_bracketed_expression("=, 1, 1"));
    assert!(!is_bracketed_expression(" {=, 1, 1}"));
    assert!(!is_bracketed_expression(r"\{a\}"));
}

#[test]
fn test_is_variable_reference() {
    assert!(is_variable_reference("$var1"));
    assert!(is_variable_reference("$"));
    assert!(!is_variable_reference(""));
    assert!(!is_variable_reference("var1"));
    assert!(!is_variable_reference(r"\$var1"));
}

// ============================================================================
// Outer Brackets
// ============================================================================

#[test]
fn test_trim_outer_brackets() {
    assert_eq!(trim_outer_brackets("{=, 11, 21}"), "=, 11, 21");
    assert_eq!(trim_outer_brackets("  { =, 11, 21 }  "), "=, 11, 21");
    assert_eq!(trim_outer_brackets("{}"), "");
}

#[test]
fn test_trim_outer_brackets_returns_unbracketed_input_untouched() {
    assert_eq!(trim_outer_brackets("  =, 11, 21 "), "  =, 11, 21 ");
    assert_eq!(trim_outer_brackets("{=, 1, 1}, x"), "{=, 1, 1}, x");
}

#[test]
fn test_trim_outer_brackets_is_idempotent() {
    let inputs = vec!["{=, 11, 21}", "{OR, {=, 1, 1}, True}", "  {NOT, False} "];
    for input in inputs {
        let once = trim_outer_brackets(input);
        assert_eq!(trim_outer_brackets(once), once, "Failed for input: {}", input);
    }
}

#[test]
fn test_trim_outer_brackets_removes_one_pair_only() {
    assert_eq!(trim_outer_brackets("{{a}}"), "{a}");
}

// ============================================================================
// Argument Splitting
// ============================================================================

#[test]
fn test_first_argument_is_operation() {
    assert_eq!(next_top_level_argument("=, 11, 21", 0), "=");
    assert_eq!(next_top_level_argument("OR, {=, 11, 21}, {<, 11, 21}", 0), "OR");
}

#[test]
fn test_next_argument_from_offset() {
    assert_eq!(next_top_level_argument("=, 11, 21", 2), " 11");
    assert_eq!(next_top_level_argument("=, 11, 21", 7), "21");
}

#[test]
fn test_next_argument_past_end_is_empty() {
    let text = "=, 11, 21";
    assert_eq!(next_top_level_argument(text, text.len()), "");
    assert_eq!(next_top_level_argument(text, text.len() + 1), "");
}

#[test]
fn test_nested_separators_are_skipped() {
    let text = "OR, {=, 11, 21}, {<, 11, 21}";
    assert_eq!(next_top_level_argument(text, 3), " {=, 11, 21}");
    assert_eq!(next_top_level_argument(text, 16), " {<, 11, 21}");
}

#[test]
fn test_escaped_separator_and_braces() {
    let text = r"=, 4\{\}$\,\\2, x";
    assert_eq!(next_top_level_argument(text, 2), r" 4\{\}$\,\\2");
}

#[test]
fn test_escaped_escape_does_not_protect_separator() {
    let text = r"a\\,b";
    assert_eq!(next_top_level_argument(text, 0), r"a\\");
}

#[test]
fn test_unbalanced_close_shifts_split() {
    // depth goes negative, so no separator after it counts as top level
    assert_eq!(next_top_level_argument("a}, b, c", 0), "a}, b, c");
}

#[test]
fn test_lexer_walks_all_pieces() {
    let pieces: Vec<&str> = Lexer::new("=, 11, 21").collect();
    assert_eq!(pieces, vec!["=", " 11", " 21"]);
}

#[test]
fn test_piece_count_is_separators_plus_one() {
    let test_cases = vec![
        ("NOT, True", 2),
        ("=, a,, b", 4),
        ("IN, , ", 3),
        ("OR, {AND, 1, 2}, {=, a\\,b, c}", 3),
        ("AND", 1),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Lexer::new(input).count(), expected, "Failed for input: {}", input);
    }
}

// ============================================================================
// Variables and Indices
// ============================================================================

#[test]
fn test_extract_variable_name() {
    assert_eq!(extract_variable_name("$variable1"), "variable1");
    assert_eq!(extract_variable_name("$array1[21][12]"), "array1");
    assert_eq!(extract_variable_name("$"), "");
}

#[test]
fn test_next_index_token() {
    let text = "$array1[21][12]";
    assert_eq!(next_index_token(text, 0), "21");
    assert_eq!(next_index_token(text, 8), "12");
    assert_eq!(next_index_token(text, 12), "");
    assert_eq!(next_index_token("$var", 0), "");
    assert_eq!(next_index_token("$var[1", 0), "");
}

// ============================================================================
// Unescaping
// ============================================================================

#[test]
fn test_unescape_structural_characters() {
    assert_eq!(unescape(r"4\{\}$\,\\2"), r"4{}$,\2");
    assert_eq!(unescape(r"\$name\[0\]"), "$name[0]");
}

#[test]
fn test_unescape_keeps_other_backslashes() {
    assert_eq!(unescape(r"C:\temp"), r"C:\temp");
    assert_eq!(unescape(r"trailing\"), r"trailing\");
}
