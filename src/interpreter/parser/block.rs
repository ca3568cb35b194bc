use crate::{
    ast::Stmt,
    interpreter::{
        lexer::{Token, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

/// Returns `true` when `token` can begin a statement.
///
/// This is the single definition of the statement-starting set: both
/// [`Parser::parse_block`] (to decide whether to continue) and
/// [`Parser::parse_statement`] (to dispatch) rely on it staying in sync with
/// the statement grammar.
#[must_use]
pub const fn starts_statement(token: &Token) -> bool {
    matches!(token,
             Token::Identifier(_)
             | Token::While
             | Token::If
             | Token::Home
             | Token::PenUp
             | Token::PenDown
             | Token::Forward
             | Token::Left
             | Token::Right
             | Token::PushState
             | Token::PopState)
}

impl<S: TokenSource> Parser<S> {
    /// Parses a maximal run of adjacent statements.
    ///
    /// Grammar: `block := stmt+`
    ///
    /// At least one statement is required; further statements are parsed as
    /// long as the lookahead starts one. No separator is needed between them.
    ///
    /// # Returns
    /// A [`Stmt::Block`] holding the statements in source order.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Stmt> {
        let mut statements = vec![self.parse_statement()?];

        while starts_statement(self.lookahead()) {
            statements.push(self.parse_statement()?);
        }

        Ok(Stmt::Block(statements))
    }
}
