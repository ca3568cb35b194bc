use crate::{
    ast::{BinaryOperator, Expr},
    error::GrammarRule,
    interpreter::{
        lexer::{Token, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token spells a binary operator
/// (`+`, `-`, `*`, `/`, `AND`, `OR` and the six comparisons) and `None` for
/// all other tokens.
///
/// # Example
/// ```
/// use turtlec::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::NotEqual),
///            Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

/// Determines whether a binary operator is one of the six comparisons.
///
/// # Example
/// ```
/// use turtlec::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::LessEqual));
/// assert!(!is_relational_op(BinaryOperator::And));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual)
}

impl<S: TokenSource> Parser<S> {
    /// Returns the lookahead's operator when it is one of `accepted`.
    fn peek_operator(&self, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
        token_to_binary_operator(self.lookahead()).filter(|op| accepted.contains(op))
    }

    /// Parses a left-associative chain `operand (op operand)*`.
    ///
    /// Every level of the binary precedence ladder is an instance of this
    /// loop; only the accepted operators and the operand parser differ.
    fn parse_left_assoc(&mut self,
                        accepted: &[BinaryOperator],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self.peek_operator(accepted) {
            let token = self.lookahead().kind();
            self.match_token(token)?;
            let right = operand(self)?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// This is the entry point for arithmetic expressions.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Add, BinaryOperator::Sub], Self::parse_term)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Mul, BinaryOperator::Div], Self::parse_factor)
    }

    /// Parses logical OR chains; the entry point for conditions.
    ///
    /// Grammar: `bool := bool_term ("OR" bool_term)*`
    pub(in crate::interpreter::parser) fn parse_bool(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Or], Self::parse_bool_term)
    }

    /// Parses logical AND chains.
    ///
    /// Grammar: `bool_term := bool_factor ("AND" bool_factor)*`
    ///
    /// The first factor becomes the left operand, so `a AND b AND c` is
    /// `(a AND b) AND c`.
    fn parse_bool_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::And], Self::parse_bool_factor)
    }

    /// Parses a mandatory comparison between two arithmetic expressions.
    ///
    /// Grammar: `cmp := expr ("=" | "<>" | "<" | ">" | ">=" | "<=") expr`
    ///
    /// # Errors
    /// [`crate::error::ParseErrorKind::UnrecognizedConstruct`] when the first
    /// expression is not followed by a comparison operator. A bare
    /// arithmetic expression is never accepted as a condition.
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_expression()?;

        let Some(op) = token_to_binary_operator(self.lookahead()).filter(|op| is_relational_op(*op))
        else {
            return self.unrecognized(GrammarRule::Comparison);
        };
        let token = self.lookahead().kind();
        self.match_token(token)?;

        let right = self.parse_expression()?;
        Ok(Expr::binary(left, op, right))
    }
}
