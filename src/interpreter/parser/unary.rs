use crate::{
    ast::{Expr, UnaryOperator},
    error::GrammarRule,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses an arithmetic operand.
    ///
    /// Supports the prefix operators `+` (identity, produces no node) and `-`
    /// (negation). Prefix operators are right-associative, so `--x` is
    /// `-(-x)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "+" factor
    ///             | "-" factor
    ///             | "(" expr ")"
    ///             | IDENT
    ///             | REAL
    /// ```
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.lookahead() {
            Token::Plus => {
                self.match_token(TokenKind::Plus)?;
                self.parse_factor()
            },
            Token::Minus => {
                self.match_token(TokenKind::Minus)?;
                let operand = self.parse_factor()?;
                Ok(Expr::unary(UnaryOperator::Negate, operand))
            },
            Token::LParen => {
                self.match_token(TokenKind::LParen)?;
                let inner = self.parse_expression()?;
                self.match_token(TokenKind::RParen)?;
                Ok(inner)
            },
            Token::Identifier(_) => Ok(Expr::Variable(self.match_identifier()?)),
            Token::Real(_) => Ok(Expr::Constant(self.match_real()?)),
            _ => self.unrecognized(GrammarRule::Factor),
        }
    }

    /// Parses a boolean operand.
    ///
    /// Grammar:
    /// ```text
    ///     bool_factor := "NOT" bool_factor
    ///                  | "(" bool ")"
    ///                  | cmp
    /// ```
    ///
    /// A leading `(` always opens a parenthesized condition. Parenthesized
    /// arithmetic is therefore only possible after the comparison operator or
    /// inside a larger arithmetic operand, e.g. `x * (y + 1) < 3`.
    pub(in crate::interpreter::parser) fn parse_bool_factor(&mut self) -> ParseResult<Expr> {
        match self.lookahead() {
            Token::Not => {
                self.match_token(TokenKind::Not)?;
                let operand = self.parse_bool_factor()?;
                Ok(Expr::unary(UnaryOperator::Not, operand))
            },
            Token::LParen => {
                self.match_token(TokenKind::LParen)?;
                let inner = self.parse_bool()?;
                self.match_token(TokenKind::RParen)?;
                Ok(inner)
            },
            _ => self.parse_comparison(),
        }
    }
}
