use crate::interpreter::lexer::{Token, TokenKind};

/// The grammar rules that choose between alternatives on the lookahead.
///
/// When none of a rule's alternatives starts with the current token the
/// parser reports [`ParseErrorKind::UnrecognizedConstruct`] naming the rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GrammarRule {
    /// A statement (assignment, loop, conditional or turtle action).
    Statement,
    /// The tail of an `IF`: `ELSIF`, `ELSE` or `FI`.
    ElsePart,
    /// An arithmetic operand.
    Factor,
    /// A comparison between two arithmetic expressions.
    Comparison,
}

impl std::fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Statement => write!(f, "a statement"),
            Self::ElsePart => write!(f, "'ELSIF', 'ELSE' or 'FI'"),
            Self::Factor => write!(f, "a number, variable or '('"),
            Self::Comparison => write!(f, "a comparison operator"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// What went wrong while parsing, without positional context.
///
/// Every grammar function returns this; [`ParseError`] adds the line.
pub enum ParseErrorKind {
    /// The lookahead did not equal the token demanded by `match`.
    UnexpectedToken {
        /// The token encountered.
        found:    Token,
        /// The token the grammar required.
        expected: TokenKind,
    },
    /// The lookahead starts no alternative of the current grammar rule.
    UnrecognizedConstruct {
        /// The rule being parsed.
        rule:  GrammarRule,
        /// The token encountered.
        found: Token,
    },
    /// The token source could not form a token from the input.
    InvalidCharacter {
        /// The offending source text.
        slice: String,
    },
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "Unexpected token '{found}', Expecting '{expected}'")
            },
            Self::UnrecognizedConstruct { rule, found } => {
                write!(f, "Unexpected token '{found}', Expecting {rule}")
            },
            Self::InvalidCharacter { slice } => write!(f, "Invalid character sequence '{slice}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A syntax error annotated with the line on which parsing stopped.
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The source line active when the error was raised.
    pub line: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_tokens() {
        let error = ParseError { kind: ParseErrorKind::UnexpectedToken { found:    Token::Fi,
                                                                         expected: TokenKind::Od, },
                                 line: 7, };

        assert_eq!(error.to_string(), "7: Unexpected token 'FI', Expecting 'OD'");
    }

    #[test]
    fn unrecognized_construct_names_the_rule() {
        let error =
            ParseError { kind: ParseErrorKind::UnrecognizedConstruct { rule:  GrammarRule::Factor,
                                                                       found: Token::RParen, },
                         line: 2, };

        assert_eq!(error.to_string(),
                   "2: Unexpected token ')', Expecting a number, variable or '('");
    }
}
