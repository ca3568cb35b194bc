use log::debug;

use crate::{
    ast::Program,
    error::{GrammarRule, ParseError, ParseErrorKind},
    interpreter::lexer::{Token, TokenKind, TokenSource},
};

/// Result type used by the grammar functions.
///
/// Errors carry no line; [`Parser::parse`] adds it on the way out.
pub type ParseResult<T> = Result<T, ParseErrorKind>;

/// Recursive-descent parser with a single token of lookahead.
///
/// Grammar functions inspect [`Parser::lookahead`] to choose a production and
/// consume tokens only through [`Parser::match_token`]. There is no
/// backtracking and no error recovery: the first error ends the parse.
pub struct Parser<S: TokenSource> {
    source:    S,
    lookahead: Token,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser reading from `source`.
    ///
    /// No token is read until [`Parser::parse`] is called.
    pub const fn new(source: S) -> Self {
        Self { source,
               lookahead: Token::Eot }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := block* EOT`
    ///
    /// The lookahead is primed with the first token, then blocks are parsed
    /// until end of text.
    ///
    /// # Errors
    /// Returns a [`ParseError`] carrying the line the token source was on when
    /// the first syntax error was detected. No partial program is returned.
    ///
    /// # Example
    /// ```
    /// use turtlec::{
    ///     ast::{Expr, Stmt},
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let program = Parser::new(Lexer::new("PENDOWN FORWARD 10")).parse().unwrap();
    ///
    /// assert_eq!(program.statements,
    ///            vec![Stmt::Block(vec![Stmt::PenDown, Stmt::Forward(Expr::Constant(10.0))])]);
    /// ```
    pub fn parse(mut self) -> Result<Program, ParseError> {
        match self.parse_program() {
            Ok(program) => {
                debug!("parsed {} top-level statement(s)", program.statements.len());
                Ok(program)
            },
            Err(kind) => Err(ParseError { kind,
                                          line: self.source.line() }),
        }
    }

    fn parse_program(&mut self) -> ParseResult<Program> {
        self.lookahead = self.source.next_token()?;

        let mut statements = Vec::new();
        while self.lookahead != Token::Eot {
            statements.push(self.parse_block()?);
        }
        self.match_token(TokenKind::Eot)?;

        Ok(Program { statements })
    }

    /// The current, not yet consumed, token.
    pub(in crate::interpreter::parser) const fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Consumes the lookahead if it is of the `expected` kind.
    ///
    /// This is the only place tokens are consumed. End of text is matched
    /// without reading past it.
    ///
    /// # Errors
    /// Returns [`ParseErrorKind::UnexpectedToken`] naming the token found and
    /// the token expected.
    pub(in crate::interpreter::parser) fn match_token(&mut self,
                                                      expected: TokenKind)
                                                      -> ParseResult<Token> {
        if self.lookahead.kind() != expected {
            return Err(ParseErrorKind::UnexpectedToken { found: self.lookahead.clone(),
                                                         expected });
        }
        if expected == TokenKind::Eot {
            return Ok(Token::Eot);
        }

        let next = self.source.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    /// Matches an identifier and returns its name.
    pub(in crate::interpreter::parser) fn match_identifier(&mut self) -> ParseResult<String> {
        match self.match_token(TokenKind::Identifier)? {
            Token::Identifier(name) => Ok(name),
            found => Err(ParseErrorKind::UnexpectedToken { found,
                                                         expected: TokenKind::Identifier }),
        }
    }

    /// Matches a numeric literal and returns its value.
    pub(in crate::interpreter::parser) fn match_real(&mut self) -> ParseResult<f32> {
        match self.match_token(TokenKind::Real)? {
            Token::Real(value) => Ok(value),
            found => Err(ParseErrorKind::UnexpectedToken { found,
                                                         expected: TokenKind::Real }),
        }
    }

    /// Fails with the current lookahead as an unrecognized start of `rule`.
    pub(in crate::interpreter::parser) fn unrecognized<T>(&self,
                                                          rule: GrammarRule)
                                                          -> ParseResult<T> {
        Err(ParseErrorKind::UnrecognizedConstruct { rule,
                                                    found: self.lookahead.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Expr, Stmt, UnaryOperator},
        interpreter::lexer::Lexer,
    };

    fn parse(source: &str) -> Result<Program, ParseError> {
        Parser::new(Lexer::new(source)).parse()
    }

    fn parse_single(source: &str) -> Stmt {
        let mut program = parse(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
        assert_eq!(program.statements.len(), 1);
        match program.statements.remove(0) {
            Stmt::Block(mut statements) if statements.len() == 1 => statements.remove(0),
            other => other,
        }
    }

    fn condition_of(source: &str) -> Expr {
        match parse_single(source) {
            Stmt::While { condition, .. } | Stmt::If { condition, .. } => condition,
            other => panic!("not a conditional statement: {other:?}"),
        }
    }

    fn num(value: f32) -> Expr {
        Expr::Constant(value)
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn empty_program_has_no_statements() {
        assert_eq!(parse("").unwrap(), Program::default());
        assert_eq!(parse("  // nothing here\n").unwrap(), Program::default());
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse_single("FORWARD 10+5*2"),
                   Stmt::Forward(Expr::binary(num(10.0),
                                              BinaryOperator::Add,
                                              Expr::binary(num(5.0),
                                                           BinaryOperator::Mul,
                                                           num(2.0)))));
    }

    #[test]
    fn additive_operators_are_left_associative() {
        assert_eq!(parse_single("x := 8 - 4 - 2"),
                   Stmt::Assign { name:  "x".to_string(),
                                  value: Expr::binary(Expr::binary(num(8.0),
                                                                   BinaryOperator::Sub,
                                                                   num(4.0)),
                                                      BinaryOperator::Sub,
                                                      num(2.0)), });
    }

    #[test]
    fn unary_minus_nests_and_unary_plus_vanishes() {
        assert_eq!(parse_single("FORWARD -(-5)"),
                   Stmt::Forward(Expr::unary(UnaryOperator::Negate,
                                             Expr::unary(UnaryOperator::Negate, num(5.0)))));
        assert_eq!(parse_single("FORWARD +x"), Stmt::Forward(var("x")));
    }

    #[test]
    fn and_chains_fold_left_to_right() {
        let a = Expr::binary(var("a"), BinaryOperator::Less, num(1.0));
        let b = Expr::binary(var("b"), BinaryOperator::Less, num(2.0));
        let c = Expr::binary(var("c"), BinaryOperator::Less, num(3.0));

        assert_eq!(condition_of("WHILE a < 1 AND b < 2 AND c < 3 DO HOME OD"),
                   Expr::binary(Expr::binary(a, BinaryOperator::And, b),
                                BinaryOperator::And,
                                c));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let a = Expr::binary(var("a"), BinaryOperator::Equal, num(1.0));
        let b = Expr::binary(var("b"), BinaryOperator::Equal, num(2.0));
        let c = Expr::binary(var("c"), BinaryOperator::Equal, num(3.0));

        assert_eq!(condition_of("IF a = 1 OR b = 2 AND c = 3 THEN HOME FI"),
                   Expr::binary(a,
                                BinaryOperator::Or,
                                Expr::binary(b, BinaryOperator::And, c)));
    }

    #[test]
    fn not_applies_to_a_single_factor() {
        let a = Expr::binary(var("a"), BinaryOperator::NotEqual, num(1.0));
        let b = Expr::binary(var("b"), BinaryOperator::GreaterEqual, num(2.0));

        assert_eq!(condition_of("IF NOT a <> 1 AND b >= 2 THEN HOME FI"),
                   Expr::binary(Expr::unary(UnaryOperator::Not, a), BinaryOperator::And, b));
    }

    #[test]
    fn parenthesized_condition_groups_boolean_operators() {
        let a = Expr::binary(var("a"), BinaryOperator::LessEqual, num(1.0));
        let b = Expr::binary(var("b"), BinaryOperator::Greater, num(2.0));
        let c = Expr::binary(var("c"), BinaryOperator::Less, num(3.0));

        assert_eq!(condition_of("IF (a <= 1 OR b > 2) AND c < 3 THEN HOME FI"),
                   Expr::binary(Expr::binary(a, BinaryOperator::Or, b),
                                BinaryOperator::And,
                                c));
    }

    #[test]
    fn elsif_chain_nests_in_else_branch() {
        let statement = parse_single("IF x = 0 THEN HOME ELSIF x = 1 THEN PENUP ELSE PENDOWN FI");

        let expected =
            Stmt::If { condition:   Expr::binary(var("x"), BinaryOperator::Equal, num(0.0)),
                       body:        Box::new(Stmt::Block(vec![Stmt::Home])),
                       else_branch: Some(Box::new(Stmt::If { condition:   Expr::binary(var("x"),
                                                                                       BinaryOperator::Equal,
                                                                                       num(1.0)),
                                                             body:        Box::new(Stmt::Block(vec![Stmt::PenUp])),
                                                             else_branch: Some(Box::new(Stmt::Block(vec![Stmt::PenDown]))), })), };
        assert_eq!(statement, expected);
    }

    #[test]
    fn if_without_else_has_no_branch() {
        match parse_single("IF x > 0 THEN HOME FI") {
            Stmt::If { else_branch, .. } => assert!(else_branch.is_none()),
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn adjacent_statements_form_one_block() {
        let program = parse("PENDOWN\nFORWARD 1 LEFT 90\nx := 2").unwrap();

        assert_eq!(program.statements,
                   vec![Stmt::Block(vec![Stmt::PenDown,
                                         Stmt::Forward(num(1.0)),
                                         Stmt::Left(num(90.0)),
                                         Stmt::Assign { name:  "x".to_string(),
                                                        value: num(2.0), }])]);
    }

    #[test]
    fn missing_od_reports_mismatch_with_line() {
        let error = parse("x := 3\nWHILE x > 0 DO\n  FORWARD 10\nFI").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnexpectedToken { found:    Token::Fi,
                                                     expected: TokenKind::Od, });
        assert_eq!(error.line, 4);
        assert_eq!(error.to_string(), "4: Unexpected token 'FI', Expecting 'OD'");
    }

    #[test]
    fn missing_od_at_end_of_text() {
        let error = parse("WHILE x > 0 DO\n  FORWARD 10").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnexpectedToken { found:    Token::Eot,
                                                     expected: TokenKind::Od, });
        assert_eq!(error.line, 2);
    }

    #[test]
    fn bare_expression_is_not_a_condition() {
        let error = parse("x := 3 WHILE x DO x := x - 1 OD").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnrecognizedConstruct { rule:  GrammarRule::Comparison,
                                                           found: Token::Do, });
    }

    #[test]
    fn stray_token_is_not_a_statement() {
        let error = parse("HOME\n)").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnrecognizedConstruct { rule:  GrammarRule::Statement,
                                                           found: Token::RParen, });
        assert_eq!(error.line, 2);
    }

    #[test]
    fn dangling_if_needs_else_part() {
        let error = parse("IF x < 1 THEN HOME OD").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnrecognizedConstruct { rule:  GrammarRule::ElsePart,
                                                           found: Token::Od, });
    }

    #[test]
    fn missing_operand_is_reported() {
        let error = parse("FORWARD 1 +").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnrecognizedConstruct { rule:  GrammarRule::Factor,
                                                           found: Token::Eot, });
    }

    #[test]
    fn assignment_requires_walrus() {
        let error = parse("x = 1").unwrap_err();

        assert_eq!(error.kind,
                   ParseErrorKind::UnexpectedToken { found:    Token::Equal,
                                                     expected: TokenKind::Assign, });
    }

    #[test]
    fn lexer_errors_surface_with_line() {
        let error = parse("HOME\nFORWARD 1 ? 2").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::InvalidCharacter { slice: "?".to_string() });
        assert_eq!(error.line, 2);
    }
}
