//! Tests for file-level parsing: statement sequences, Python blocks,
//! separators, position monotonicity and the first-error policy.

use bzl_ast::{ASTNode, Expr, walk_file};
use bzl_parser::{ParseError, Parser, parse};

#[test]
fn empty_inputs() {
    assert!(parse("").unwrap().stmts.is_empty());
    assert!(parse("\n\n\n").unwrap().stmts.is_empty());
}

#[test]
fn a_small_build_file() {
    let file = parse(
        "load(\"//tools:defs.bzl\", \"my_rule\")\n\nmy_rule(\n    name = \"thing\",\n    deps = [\":a\"],\n)\n\nVERSION = \"1.2\"\n",
    )
    .unwrap();

    assert_eq!(file.stmts.len(), 3);
    assert!(matches!(file.stmts[0], Expr::Call(_)));
    assert!(matches!(file.stmts[1], Expr::Call(_)));
    assert!(matches!(&file.stmts[2], Expr::Binary(b) if b.op == "="));
}

#[test]
fn statement_without_final_newline() {
    let file = parse("x = 1").unwrap();
    assert_eq!(file.stmts.len(), 1);
}

#[test]
fn semicolons_are_accepted_and_dropped() {
    let file = parse("foo();\nbar()\n").unwrap();
    assert_eq!(file.stmts.len(), 2);

    let file = parse("a = 1; b = 2\n").unwrap();
    assert_eq!(file.stmts.len(), 2);
}

#[test]
fn python_block_statement() {
    let file = parse("def helper(x):\n    return x\n\ncc_library(name = \"x\")\n").unwrap();
    assert_eq!(file.stmts.len(), 2);
    let Expr::Python(block) = &file.stmts[0] else { panic!("expected python block") };
    assert_eq!(block.token, "def helper(x):\n    return x");
    assert!(matches!(file.stmts[1], Expr::Call(_)));
}

#[test]
fn python_block_spans_continuation_keywords() {
    let file = parse("if flag:\n    a = 1\nelse:\n    a = 2\n\nb = 3\n").unwrap();
    assert_eq!(file.stmts.len(), 2);
    let Expr::Python(block) = &file.stmts[0] else { panic!("expected python block") };
    assert!(block.token.contains("else:"));
}

#[test]
fn python_block_positions() {
    let file = parse("x = 1\n\ndef f():\n    pass\n").unwrap();
    let Expr::Python(block) = &file.stmts[1] else { panic!("expected python block") };
    assert_eq!(block.start.line, 3);
    assert_eq!(block.end.line, 4);
}

#[test]
fn positions_are_monotone_in_traversal_order() {
    let source = "\
load(\"//tools:defs.bzl\", \"my_rule\")

my_rule(
    name = \"thing\",
    srcs = glob([\"*.cc\"]) + [\"gen.cc\"],
    deps = select({
        \"//conditions:linux\": [\":linux\"],
        \"//conditions:default\": [],
    }),
    numbered = {n: n * 2 for n in counts if n},
    flag = value if enabled else fallback,
)

names = [x.name for (x, y) in pairs if x not in skip]
";
    let file = parse(source).unwrap();

    let mut previous = 0;
    walk_file(&file, &mut |node| {
        let start = node.span().start.offset;
        assert!(start >= previous, "node at offset {start} visited after {previous}");
        previous = start;
    });
}

#[test]
fn node_extents_are_non_empty() {
    let file = parse("f(1)\nx = [1, 2]\n").unwrap();
    walk_file(&file, &mut |node| {
        let span = node.span();
        assert!(span.start.offset <= span.end.offset);
    });
}

#[test]
fn first_error_aborts_the_parse() {
    let err = parse("good()\nf(]\nnever_reached(\n").unwrap_err();
    let pos = err.position();
    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 3);
}

#[test]
fn unterminated_call_reports_eof() {
    let err = parse("f(1, 2,\n").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn lexical_error_surfaces_through_parse() {
    let err = parse("x = \"a\\qb\"\n").unwrap_err();
    assert!(matches!(err, ParseError::Lexical(_)));
    assert_eq!(err.position().line, 1);
}

#[test]
fn two_expressions_on_one_line_is_an_error() {
    assert!(parse("f() g()\n").is_err());
}

#[test]
fn bare_tuple_at_statement_level_is_an_error() {
    // A statement is a single expression; the comma only forms tuples inside
    // brackets
    let err = parse("a, b = c\n").unwrap_err();
    assert_eq!(err.position().line, 1);
    assert_eq!(err.position().column, 2);

    assert!(parse("a, b\n").is_err());
}

#[test]
fn class_is_not_a_python_block_keyword() {
    // `class` is outside the block-keyword set, so this is two bare
    // identifiers in a row
    let err = parse("class Foo:\n    pass\n").unwrap_err();
    assert_eq!(err.position().line, 1);
    assert_eq!(err.position().column, 7);
}

#[test]
fn file_path_is_recorded() {
    let parser = Parser::new("x = 1\n").unwrap();
    let file = parser.parse_file(Some("pkg/BUILD".into())).unwrap();
    assert_eq!(file.path.as_deref(), Some(std::path::Path::new("pkg/BUILD")));
}

#[test]
fn parallel_parses_are_independent() {
    let sources = ["a = 1\n", "b = [2]\n", "c(d = 3)\n"];
    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| std::thread::spawn(move || parse(source).map(|file| file.stmts.len())))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 1);
    }
}
