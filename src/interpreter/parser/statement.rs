use crate::{
    ast::{Expr, Stmt},
    error::GrammarRule,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    ///     stmt := IDENT ":=" expr
    ///           | WHILE bool DO block OD
    ///           | IF bool THEN block else_part
    ///           | action
    /// ```
    ///
    /// # Errors
    /// [`crate::error::ParseErrorKind::UnrecognizedConstruct`] when the
    /// lookahead starts no statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.lookahead() {
            Token::Identifier(_) => self.parse_assignment(),
            Token::While => self.parse_while(),
            Token::If => self.parse_if(),
            _ => self.parse_action(),
        }
    }

    /// Grammar: `assign := IDENT ":=" expr`
    fn parse_assignment(&mut self) -> ParseResult<Stmt> {
        let name = self.match_identifier()?;
        self.match_token(TokenKind::Assign)?;
        let value = self.parse_expression()?;

        Ok(Stmt::Assign { name, value })
    }

    /// Grammar: `WHILE bool DO block OD`
    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.match_token(TokenKind::While)?;
        let condition = self.parse_bool()?;
        self.match_token(TokenKind::Do)?;
        let body = self.parse_block()?;
        self.match_token(TokenKind::Od)?;

        Ok(Stmt::While { condition,
                         body: Box::new(body) })
    }

    /// Grammar: `IF bool THEN block else_part`
    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.match_token(TokenKind::If)?;
        self.parse_conditional_arm()
    }

    /// Parses `bool THEN block else_part`, shared by `IF` and `ELSIF`.
    fn parse_conditional_arm(&mut self) -> ParseResult<Stmt> {
        let condition = self.parse_bool()?;
        self.match_token(TokenKind::Then)?;
        let body = self.parse_block()?;
        let else_branch = self.parse_else_part()?;

        Ok(Stmt::If { condition,
                      body: Box::new(body),
                      else_branch: else_branch.map(Box::new) })
    }

    /// Parses the tail of a conditional.
    ///
    /// Grammar:
    /// ```text
    ///     else_part := ELSIF bool THEN block else_part
    ///                | ELSE block FI
    ///                | FI
    /// ```
    ///
    /// An `ELSIF` arm becomes a nested [`Stmt::If`], so the chain is
    /// right-recursive. Only the innermost arm consumes the closing `FI`.
    ///
    /// # Returns
    /// The statement to run when the condition is false, or `None` when the
    /// conditional ends with a bare `FI`.
    fn parse_else_part(&mut self) -> ParseResult<Option<Stmt>> {
        match self.lookahead() {
            Token::Elsif => {
                self.match_token(TokenKind::Elsif)?;
                Ok(Some(self.parse_conditional_arm()?))
            },
            Token::Else => {
                self.match_token(TokenKind::Else)?;
                let body = self.parse_block()?;
                self.match_token(TokenKind::Fi)?;
                Ok(Some(body))
            },
            Token::Fi => {
                self.match_token(TokenKind::Fi)?;
                Ok(None)
            },
            _ => self.unrecognized(GrammarRule::ElsePart),
        }
    }

    /// Parses a turtle action.
    ///
    /// Grammar:
    /// ```text
    ///     action := HOME | PENUP | PENDOWN | PUSHSTATE | POPSTATE
    ///             | FORWARD expr | LEFT expr | RIGHT expr
    /// ```
    fn parse_action(&mut self) -> ParseResult<Stmt> {
        let (kind, statement): (TokenKind, fn(Expr) -> Stmt) = match self.lookahead() {
            Token::Home => return self.parse_bare_action(TokenKind::Home, Stmt::Home),
            Token::PenUp => return self.parse_bare_action(TokenKind::PenUp, Stmt::PenUp),
            Token::PenDown => return self.parse_bare_action(TokenKind::PenDown, Stmt::PenDown),
            Token::PushState => {
                return self.parse_bare_action(TokenKind::PushState, Stmt::PushState);
            },
            Token::PopState => return self.parse_bare_action(TokenKind::PopState, Stmt::PopState),
            Token::Forward => (TokenKind::Forward, Stmt::Forward),
            Token::Left => (TokenKind::Left, Stmt::Left),
            Token::Right => (TokenKind::Right, Stmt::Right),
            _ => return self.unrecognized(GrammarRule::Statement),
        };

        self.match_token(kind)?;
        let operand = self.parse_expression()?;
        Ok(statement(operand))
    }

    fn parse_bare_action(&mut self, kind: TokenKind, statement: Stmt) -> ParseResult<Stmt> {
        self.match_token(kind)?;
        Ok(statement)
    }
}
