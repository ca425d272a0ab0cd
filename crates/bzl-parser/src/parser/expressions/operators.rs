//! Operator parsing and binding power
//!
//! This module contains operator-related parsing including:
//! - Binding power (operator precedence)
//! - Binary operator parsing, with the `not in` and `is not` normalizations
//! - Ternary operator parsing (`if`-`else`)
//! - Unary operator parsing

use bzl_ast::{BinaryExpr, ConditionalExpr, Expr, UnaryExpr};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// Get the binding power for infix and postfix operators
///
/// Returns (`left_binding_power`, `right_binding_power`); all operators here
/// are left-associative, so `right_bp = left_bp + 1`. Lower binding power
/// means lower precedence (binds less tightly). Level *L* of the grammar's
/// precedence table maps to (2·L, 2·L + 1).
///
/// ## Operator Precedence (lowest to highest)
///
/// 1. Assignments (`=`, `+=`) — expressions in this grammar — 4/5
/// 2. Ternary (`if`-`else`) — 6/7
/// 3. `in`, `not in`, `is`, `is not` — 12/13, *below* `or` and `and`: the
///    grammar resolves `x in y or z` as `x in (y or z)`, kept verbatim
/// 4. Logical OR (`or`) — 14/15
/// 5. Logical AND (`and`) — 16/17
/// 6. Comparisons (`<`, `>`, `==`, `!=`, `<=`, `>=`; chains left) — 18/19
/// 7. Addition/Subtraction (`+`, `-`) — 20/21
/// 8. Multiplication/Division/Modulo (`*`, `/`, `%`) — 22/23
/// 9. Postfix (`.`, `[`, `(`) — 24/25
///
/// `,` and `:` are structural, not infix. Juxtaposed strings bind tightest
/// of all and fold in the string parser.
#[inline]
pub(super) const fn infix_binding_power(op: TokenKind) -> Option<(u8, u8)> {
    Some(match op {
        // Assignments
        TokenKind::Eq | TokenKind::PlusEq => (4, 5),

        // Ternary; the matching `else` is consumed by the ternary parser
        TokenKind::If => (6, 7),

        // Membership and identity; `not` here is the head of `not in`
        TokenKind::In | TokenKind::Not | TokenKind::Is => (12, 13),

        // Logical OR
        TokenKind::Or => (14, 15),

        // Logical AND
        TokenKind::And => (16, 17),

        // Comparisons (can chain: a < b < c)
        TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::EqEq
        | TokenKind::Ne
        | TokenKind::Le
        | TokenKind::Ge => (18, 19),

        // Addition and subtraction
        TokenKind::Plus | TokenKind::Minus => (20, 21),

        // Multiplication, division, modulo
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => (22, 23),

        // Postfix operators
        TokenKind::Dot | TokenKind::LParen | TokenKind::LBracket => (24, 25),

        _ => return None,
    })
}

/// Unary operators bind their operand one step above postfix, reproducing
/// the grammar's reduce-before-postfix resolution: `-a.b` parses as `(-a).b`
/// and `-f(x)` as `(-f)(x)`.
pub(super) const UNARY_OPERAND_POWER: u8 = 26;

/// The operator text for a binary operator token.
fn binary_op_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Eq => "=",
        TokenKind::PlusEq => "+=",
        TokenKind::In => "in",
        TokenKind::Is => "is",
        TokenKind::Or => "or",
        TokenKind::And => "and",
        TokenKind::Lt => "<",
        TokenKind::Gt => ">",
        TokenKind::EqEq => "==",
        TokenKind::Ne => "!=",
        TokenKind::Le => "<=",
        TokenKind::Ge => ">=",
        TokenKind::Plus => "+",
        TokenKind::Minus => "-",
        TokenKind::Star => "*",
        TokenKind::Slash => "/",
        TokenKind::Percent => "%",
        _ => unreachable!("caller dispatched on a binary operator token"),
    }
}

impl Parser<'_> {
    /// Parses a binary operator expression, the operator being current.
    pub(crate) fn parse_binary_expr(
        &mut self,
        lhs: Expr,
        right_bp: u8,
        allow_ternary: bool,
    ) -> ParseResult<Expr> {
        let op_tok = self.advance()?;

        let op = if op_tok.kind == TokenKind::Not {
            // Infix `not` is only ever the first half of `not in`
            if !self.check(TokenKind::In) {
                return Err(self.unexpected());
            }
            self.skip()?;
            "not in"
        } else {
            binary_op_text(op_tok.kind)
        };

        let rhs = self.parse_expr_bp(right_bp, allow_ternary)?;

        // `x is not y` reduces to a single `is not` operator
        if op == "is" {
            if let Expr::Unary(unary) = rhs {
                return Ok(if unary.op == "not" {
                    let UnaryExpr { x, .. } = *unary;
                    Expr::Binary(Box::new(BinaryExpr::new(lhs, op_tok.start, "is not", x)))
                } else {
                    Expr::Binary(Box::new(BinaryExpr::new(
                        lhs,
                        op_tok.start,
                        "is",
                        Expr::Unary(unary),
                    )))
                });
            }
        }

        Ok(Expr::Binary(Box::new(BinaryExpr::new(lhs, op_tok.start, op, rhs))))
    }

    /// Parses a ternary conditional: `then if test else orelse`, with `then`
    /// already parsed.
    pub(crate) fn parse_conditional_expr(&mut self, then: Expr, right_bp: u8) -> ParseResult<Expr> {
        let if_tok = self.advance()?;

        // The condition is bounded by `else`, not by precedence
        let test = self.parse_expr_bp(0, true)?;

        let else_tok = self.expect(TokenKind::Else)?;
        let orelse = self.parse_expr_bp(right_bp, true)?;

        Ok(Expr::Conditional(Box::new(ConditionalExpr::new(
            then,
            if_tok.start,
            test,
            else_tok.start,
            orelse,
        ))))
    }

    /// Parses a unary operator expression: `-x`, `not x` or `*x`.
    pub(crate) fn parse_unary_expr(&mut self, allow_ternary: bool) -> ParseResult<Expr> {
        let op_tok = self.advance()?;
        let op = match op_tok.kind {
            TokenKind::Minus => "-",
            TokenKind::Not => "not",
            TokenKind::Star => "*",
            _ => unreachable!("caller dispatched on a unary operator token"),
        };

        let x = self.parse_expr_bp(UNARY_OPERAND_POWER, allow_ternary)?;

        Ok(Expr::Unary(Box::new(UnaryExpr::new(op_tok.start, op, x))))
    }
}
