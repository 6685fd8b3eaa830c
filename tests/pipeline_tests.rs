//! End-to-end tests for the three-stage pipeline
//!
//! Each stage is total and returns partial output plus its own diagnostic
//! list; these tests chain all three the way a real caller would.

use lss::{
    analyze, builtins, Expression, LexError, Namespace, ParseError, Parser, Scanner,
    SemanticError, Token,
};

struct PipelineResult {
    forest: Vec<Expression>,
    lex_errors: Vec<LexError>,
    parse_errors: Vec<ParseError>,
    namespace: Namespace,
    semantic_errors: Vec<SemanticError>,
}

fn run(source: &str) -> PipelineResult {
    let (tokens, lex_errors) = Scanner::new(source).scan_tokens();
    let mut parser = Parser::new(tokens);
    let (forest, parse_errors) = parser.parse();
    let (namespace, semantic_errors) = analyze(&forest, builtins::global_namespace());
    PipelineResult {
        forest,
        lex_errors,
        parse_errors,
        namespace,
        semantic_errors,
    }
}

#[test]
fn test_clean_program() {
    let result = run("(+ 2 3)");
    assert!(result.lex_errors.is_empty());
    assert!(result.parse_errors.is_empty());
    assert!(result.semantic_errors.is_empty());
    assert_eq!(result.forest.len(), 1);
}

#[test]
fn test_nested_program_from_driver() {
    let result = run("(+ (+ 2 3) 4)");
    assert!(result.lex_errors.is_empty());
    assert!(result.parse_errors.is_empty());
    assert!(result.semantic_errors.is_empty());
}

#[test]
fn test_namespace_keeps_builtins_after_analysis() {
    let result = run("(+ 1 2)");
    let root = result.namespace.root();
    let plus = result.namespace.lookup(root, "+").unwrap();
    assert!(plus.is_callable());
    assert!(!plus.is_placeholder());
}

#[test]
fn test_two_top_level_expressions() {
    let result = run("(+ 1 2) (+ 2 1)");
    assert!(result.parse_errors.is_empty());
    assert_eq!(result.forest.len(), 2);
}

#[test]
fn test_each_stage_reports_independently() {
    // Line 1: unterminated string. Line 2: stray `)` and an unbound symbol.
    let result = run("\"oops\n) (foo 1)");

    assert_eq!(result.lex_errors.len(), 1);
    assert!(matches!(
        result.lex_errors[0],
        LexError::UnterminatedString { .. }
    ));

    assert_eq!(result.parse_errors.len(), 1);
    assert!(matches!(
        result.parse_errors[0],
        ParseError::UnmatchedCloseParen { line: 2, column: 1 }
    ));

    assert_eq!(result.semantic_errors.len(), 1);
    assert!(matches!(
        &result.semantic_errors[0],
        SemanticError::UndefinedSymbol { name, .. } if name == "foo"
    ));
}

#[test]
fn test_analysis_consumes_partial_parse_output() {
    // Missing `)` still leaves a usable partial list for the analyzer.
    let result = run("(+ 1 2");
    assert_eq!(result.parse_errors.len(), 1);
    assert!(result.semantic_errors.is_empty());
}

#[test]
fn test_string_atoms_flow_through() {
    let result = run("(+ 1 2) \"a\\tb\"");
    assert!(result.lex_errors.is_empty());
    assert_eq!(result.forest.len(), 2);
    assert!(result.semantic_errors.is_empty());
}

#[test]
fn test_undefined_symbols_do_not_stop_later_expressions() {
    let result = run("(foo 1) (bar 2) (+ 1 2)");
    assert_eq!(result.semantic_errors.len(), 2);
}

#[test]
fn test_token_concatenation_up_to_location_offset() {
    let a = "(+ 1 2)";
    let b = "(+ 30 (+ 4 5.5)) sym";

    let (tokens_a, _) = Scanner::new(a).scan_tokens();
    let (tokens_b, _) = Scanner::new(b).scan_tokens();
    let (tokens_joined, errors) = Scanner::new(&format!("{}\n{}", a, b)).scan_tokens();
    assert!(errors.is_empty());

    let strip = |tokens: &[Token]| -> Vec<_> {
        tokens
            .iter()
            .map(|t| (t.kind.clone(), t.lexeme.clone()))
            .collect()
    };
    let mut expected = strip(&tokens_a);
    expected.extend(strip(&tokens_b));
    assert_eq!(strip(&tokens_joined), expected);
}
