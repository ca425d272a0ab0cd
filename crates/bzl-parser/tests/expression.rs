//! Tests for expression parsing: precedence, the tuple/paren distinction,
//! string folding, comprehensions and layout hints.

use bzl_ast::{ASTNode, BracketKind, Expr};
use bzl_parser::parse_expression;

fn parse(source: &str) -> Expr {
    parse_expression(source).expect("failed to parse expression")
}

// ============================================================================
// Calls and layout hints
// ============================================================================

#[test]
fn call_with_scalar_args_is_compact() {
    let Expr::Call(call) = parse("f(1, 2, 3)") else { panic!("expected call") };
    assert_eq!(call.args.len(), 3);
    assert!(call.args.iter().all(|a| matches!(a, Expr::Literal(_))));
    assert!(call.force_compact);
    assert!(!call.force_multi_line);
}

#[test]
fn multi_line_call_is_not_compact() {
    let Expr::Call(call) = parse("f(\n    1,\n    2,\n)") else { panic!("expected call") };
    assert_eq!(call.args.len(), 2);
    assert!(!call.force_compact);
    // Two or more elements imply multi-line; the hint stays off
    assert!(!call.force_multi_line);
}

#[test]
fn force_compact_ignores_nested_layout() {
    let Expr::Call(inline) = parse("f(x, [1], y)") else { panic!("expected call") };
    let Expr::Call(spread) = parse("f(x, [\n    1,\n], y)") else { panic!("expected call") };
    // A nested container disqualifies compactness either way; reformatting it
    // must not flip the enclosing hint
    assert_eq!(inline.force_compact, spread.force_compact);
    assert!(!inline.force_compact);
}

#[test]
fn empty_call_multi_line_hint() {
    let Expr::Call(call) = parse("f(\n)") else { panic!("expected call") };
    assert!(call.force_multi_line);

    let Expr::Call(call) = parse("f()") else { panic!("expected call") };
    assert!(!call.force_multi_line);
}

#[test]
fn keyword_argument_is_an_assignment_expression() {
    let Expr::Call(call) = parse("rule(name = \"x\")") else { panic!("expected call") };
    let Expr::Binary(arg) = &call.args[0] else { panic!("expected binary") };
    assert_eq!(arg.op, "=");
    assert!(matches!(arg.x, Expr::Literal(_)));
    assert!(matches!(arg.y, Expr::String(_)));
}

// ============================================================================
// Tuple vs parenthesized expression
// ============================================================================

#[test]
fn paren_without_comma() {
    let Expr::Paren(paren) = parse("(x)") else { panic!("expected paren") };
    assert!(matches!(paren.x, Expr::Literal(_)));
}

#[test]
fn one_element_tuple_with_comma() {
    let Expr::Tuple(tuple) = parse("(x,)") else { panic!("expected tuple") };
    assert_eq!(tuple.elems.len(), 1);
    assert!(!tuple.comma.is_none());
}

#[test]
fn empty_and_two_element_tuples() {
    let Expr::Tuple(tuple) = parse("()") else { panic!("expected tuple") };
    assert!(tuple.elems.is_empty());

    let Expr::Tuple(tuple) = parse("(a, b)") else { panic!("expected tuple") };
    assert_eq!(tuple.elems.len(), 2);
    assert!(tuple.comma.is_none());
}

#[test]
fn paren_multi_line_hint() {
    let Expr::Paren(paren) = parse("(\n    x\n)") else { panic!("expected paren") };
    assert!(paren.force_multi_line);

    let Expr::Paren(paren) = parse("(x)") else { panic!("expected paren") };
    assert!(!paren.force_multi_line);
}

// ============================================================================
// String folding
// ============================================================================

#[test]
fn adjacent_strings_fold_left() {
    let Expr::Binary(outer) = parse("\"a\" \"b\" \"c\"") else { panic!("expected binary") };
    assert_eq!(outer.op, "+");
    let Expr::Binary(inner) = &outer.x else { panic!("expected left-leaning chain") };
    assert_eq!(inner.op, "+");
    assert!(matches!(&inner.x, Expr::String(s) if s.value == "a"));
    assert!(matches!(&inner.y, Expr::String(s) if s.value == "b"));
    assert!(matches!(&outer.y, Expr::String(s) if s.value == "c"));
}

#[test]
fn single_string_stays_bare() {
    assert!(matches!(parse("\"a\""), Expr::String(_)));
}

#[test]
fn folded_operator_sits_at_left_end() {
    let Expr::Binary(binary) = parse("\"a\" \"b\"") else { panic!("expected binary") };
    // "a" occupies columns 1..=3; the synthesized + sits just past it
    assert_eq!(binary.op_start.column, 4);
}

// ============================================================================
// Ternary conditional
// ============================================================================

#[test]
fn ternary() {
    let Expr::Conditional(cond) = parse("a if b else c") else { panic!("expected conditional") };
    assert!(matches!(&cond.then, Expr::Literal(l) if l.token == "a"));
    assert!(matches!(&cond.test, Expr::Literal(l) if l.token == "b"));
    assert!(matches!(&cond.orelse, Expr::Literal(l) if l.token == "c"));
}

#[test]
fn ternary_chains_left() {
    let Expr::Conditional(outer) = parse("a if b else c if d else e") else {
        panic!("expected conditional")
    };
    assert!(matches!(outer.then, Expr::Conditional(_)));
    assert!(matches!(&outer.orelse, Expr::Literal(l) if l.token == "e"));
}

// ============================================================================
// Keyword operators
// ============================================================================

#[test]
fn not_in_is_one_operator() {
    let Expr::Binary(binary) = parse("x not in y") else { panic!("expected binary") };
    assert_eq!(binary.op, "not in");
    assert!(matches!(binary.y, Expr::Literal(_)));
}

#[test]
fn is_not_normalizes() {
    let Expr::Binary(binary) = parse("x is not y") else { panic!("expected binary") };
    assert_eq!(binary.op, "is not");
    // The right side is the bare operand, never a `not` unary
    assert!(matches!(&binary.y, Expr::Literal(l) if l.token == "y"));
}

#[test]
fn in_binds_below_or() {
    // The grammar's quirk: `x in y or z` is `x in (y or z)`
    let Expr::Binary(binary) = parse("x in y or z") else { panic!("expected binary") };
    assert_eq!(binary.op, "in");
    assert!(matches!(&binary.y, Expr::Binary(rhs) if rhs.op == "or"));
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn arithmetic_precedence() {
    let Expr::Binary(binary) = parse("a + b * c") else { panic!("expected binary") };
    assert_eq!(binary.op, "+");
    assert!(matches!(&binary.y, Expr::Binary(rhs) if rhs.op == "*"));
}

#[test]
fn comparison_chains_left() {
    let Expr::Binary(binary) = parse("a < b < c") else { panic!("expected binary") };
    assert_eq!(binary.op, "<");
    assert!(matches!(&binary.x, Expr::Binary(lhs) if lhs.op == "<"));
    assert!(matches!(binary.y, Expr::Literal(_)));
}

#[test]
fn assignment_is_an_expression() {
    let Expr::Binary(binary) = parse("x = y = 1") else { panic!("expected binary") };
    assert_eq!(binary.op, "=");
    assert!(matches!(&binary.x, Expr::Binary(lhs) if lhs.op == "="));

    let Expr::Binary(binary) = parse("x += [1]") else { panic!("expected binary") };
    assert_eq!(binary.op, "+=");
}

#[test]
fn unary_reduces_before_postfix() {
    // `-a.b` resolves as `(-a).b`, matching the grammar's conflict resolution
    let Expr::Dot(dot) = parse("-a.b") else { panic!("expected dot") };
    assert!(matches!(&dot.x, Expr::Unary(u) if u.op == "-"));

    let Expr::Binary(binary) = parse("-a * b") else { panic!("expected binary") };
    assert_eq!(binary.op, "*");
    assert!(matches!(binary.x, Expr::Unary(_)));
}

#[test]
fn unary_star_argument() {
    let Expr::Call(call) = parse("f(*args)") else { panic!("expected call") };
    assert!(matches!(&call.args[0], Expr::Unary(u) if u.op == "*"));
}

#[test]
fn line_break_flag() {
    let Expr::Paren(paren) = parse("(a +\n    b)") else { panic!("expected paren") };
    let Expr::Binary(binary) = &paren.x else { panic!("expected binary") };
    assert!(binary.line_break);

    let Expr::Paren(paren) = parse("(a + b)") else { panic!("expected paren") };
    let Expr::Binary(binary) = &paren.x else { panic!("expected binary") };
    assert!(!binary.line_break);
}

// ============================================================================
// Postfix forms
// ============================================================================

#[test]
fn dot_chain() {
    let Expr::Dot(outer) = parse("x.y.z") else { panic!("expected dot") };
    assert_eq!(outer.name, "z");
    assert!(matches!(&outer.x, Expr::Dot(inner) if inner.name == "y"));
}

#[test]
fn index_and_slice() {
    assert!(matches!(parse("x[0]"), Expr::Index(_)));

    let Expr::Slice(slice) = parse("x[1:2]") else { panic!("expected slice") };
    assert!(slice.lo.is_some() && slice.hi.is_some());

    let Expr::Slice(slice) = parse("x[:2]") else { panic!("expected slice") };
    assert!(slice.lo.is_none() && slice.hi.is_some());

    let Expr::Slice(slice) = parse("x[1:]") else { panic!("expected slice") };
    assert!(slice.lo.is_some() && slice.hi.is_none());

    let Expr::Slice(slice) = parse("x[:]") else { panic!("expected slice") };
    assert!(slice.lo.is_none() && slice.hi.is_none());
}

#[test]
fn lambda() {
    let Expr::Lambda(lambda) = parse("lambda x, y: x + y") else { panic!("expected lambda") };
    assert_eq!(lambda.params.len(), 2);
    assert!(matches!(&lambda.body, Expr::Binary(b) if b.op == "+"));
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn list_with_trailing_comma() {
    let Expr::List(list) = parse("[1, 2,]") else { panic!("expected list") };
    assert_eq!(list.elems.len(), 2);
    assert!(!list.comma.is_none());

    let Expr::List(list) = parse("[1, 2]") else { panic!("expected list") };
    assert!(list.comma.is_none());
}

#[test]
fn list_multi_line_hints() {
    let Expr::List(list) = parse("[\n]") else { panic!("expected list") };
    assert!(list.elems.is_empty());
    assert!(list.force_multi_line);

    let Expr::List(list) = parse("[\n    x,\n]") else { panic!("expected list") };
    assert_eq!(list.elems.len(), 1);
    assert!(list.force_multi_line);

    let Expr::List(list) = parse("[x]") else { panic!("expected list") };
    assert!(!list.force_multi_line);
}

#[test]
fn dict_entries() {
    let Expr::Dict(dict) = parse("{\"a\": 1, \"b\": 2}") else { panic!("expected dict") };
    assert_eq!(dict.entries.len(), 2);
    assert!(dict.entries.iter().all(|e| matches!(e, Expr::KeyValue(_))));
}

// ============================================================================
// Comprehensions
// ============================================================================

#[test]
fn list_comprehension() {
    let Expr::ListFor(comp) = parse("[x for x in xs if p(x)]") else {
        panic!("expected comprehension")
    };
    assert_eq!(comp.brack, BracketKind::Square);
    assert_eq!(comp.fors.len(), 1);
    assert_eq!(comp.ifs.len(), 1);
    assert!(matches!(comp.x, Expr::Literal(_)));
}

#[test]
fn dict_comprehension_produces_key_value() {
    let Expr::ListFor(comp) = parse("{k: v for k in ks}") else {
        panic!("expected comprehension")
    };
    assert_eq!(comp.brack, BracketKind::Brace);
    assert!(matches!(comp.x, Expr::KeyValue(_)));
}

#[test]
fn generator_form() {
    let Expr::ListFor(comp) = parse("(x for x in y)") else { panic!("expected comprehension") };
    assert_eq!(comp.brack, BracketKind::Round);
}

#[test]
fn bare_comprehension_in_call() {
    let Expr::Call(call) = parse("sorted(x for x in y)") else { panic!("expected call") };
    assert_eq!(call.args.len(), 1);
    let Expr::ListFor(comp) = &call.args[0] else { panic!("expected comprehension") };
    assert_eq!(comp.brack, BracketKind::Bare);
}

#[test]
fn for_clause_variable_list() {
    let Expr::ListFor(comp) = parse("[a for (a, b) in pairs]") else {
        panic!("expected comprehension")
    };
    // The parenthesized form binds a variable list, not a tuple
    assert_eq!(comp.fors[0].vars.len(), 2);
    assert!(comp.fors[0].vars.iter().all(|v| matches!(v, Expr::Literal(_))));
}

#[test]
fn multiple_for_clauses() {
    let Expr::ListFor(comp) = parse("[x for x in a for y in b if x]") else {
        panic!("expected comprehension")
    };
    assert_eq!(comp.fors.len(), 2);
    assert_eq!(comp.ifs.len(), 1);
}

#[test]
fn comprehension_filter_excludes_ternary() {
    // The `if` clauses are filters; a ternary would swallow them
    let Expr::ListFor(comp) = parse("[x for x in xs if a if b]") else {
        panic!("expected comprehension")
    };
    assert_eq!(comp.ifs.len(), 2);
}

#[test]
fn comprehension_multi_line_hint() {
    let Expr::ListFor(comp) = parse("[\n    x\n    for x in xs\n]") else {
        panic!("expected comprehension")
    };
    assert!(comp.force_multi_line);

    let Expr::ListFor(comp) = parse("[x for x in xs]") else { panic!("expected comprehension") };
    assert!(!comp.force_multi_line);
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn spans_cover_the_whole_expression() {
    let expr = parse("f(1, 2)");
    let span = expr.span();
    assert_eq!(span.start.offset, 0);
    assert_eq!(span.end.offset, 7);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn unexpected_token_is_reported_with_position() {
    let err = parse_expression("f(]").unwrap_err();
    let pos = err.position();
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 3);
}

#[test]
fn truncated_input_reports_eof() {
    let err = parse_expression("x +").unwrap_err();
    assert_eq!(err.position().line, 1);
}

#[test]
fn bare_infix_not_is_rejected() {
    assert!(parse_expression("x not y").is_err());
}
