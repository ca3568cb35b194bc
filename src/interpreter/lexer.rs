use logos::Logos;

use crate::error::ParseErrorKind;

/// Represents a lexical token in the source input.
///
/// Identifiers and numeric literals carry their attribute (the name or the
/// value). [`Token::Eot`] is never produced by the generated lexer; the
/// [`Lexer`] wrapper yields it once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    Real(f32),
    /// `HOME`
    #[token("HOME")]
    Home,
    /// `PENUP`
    #[token("PENUP")]
    PenUp,
    /// `PENDOWN`
    #[token("PENDOWN")]
    PenDown,
    /// `FORWARD`
    #[token("FORWARD")]
    Forward,
    /// `LEFT`
    #[token("LEFT")]
    Left,
    /// `RIGHT`
    #[token("RIGHT")]
    Right,
    /// `PUSHSTATE`
    #[token("PUSHSTATE")]
    PushState,
    /// `POPSTATE`
    #[token("POPSTATE")]
    PopState,
    /// `WHILE`
    #[token("WHILE")]
    While,
    /// `DO`
    #[token("DO")]
    Do,
    /// `OD`
    #[token("OD")]
    Od,
    /// `IF`
    #[token("IF")]
    If,
    /// `THEN`
    #[token("THEN")]
    Then,
    /// `ELSIF`
    #[token("ELSIF")]
    Elsif,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `FI`
    #[token("FI")]
    Fi,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// Identifier tokens; variable names such as `x` or `size`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:=`
    #[token(":=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Multi line comments. */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of text.
    Eot,
}

/// The attribute-free kind of a [`Token`].
///
/// Used wherever a token is *expected* rather than *found*, so that the
/// parser can name, for instance, "an identifier" without inventing a name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Real,
    Home,
    PenUp,
    PenDown,
    Forward,
    Left,
    Right,
    PushState,
    PopState,
    While,
    Do,
    Od,
    If,
    Then,
    Elsif,
    Else,
    Fi,
    And,
    Or,
    Not,
    Identifier,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    LParen,
    RParen,
    Eot,
}

impl Token {
    /// Returns the kind of this token, dropping any attribute.
    ///
    /// Skipped tokens (comments, whitespace, newlines) never reach the parser;
    /// they map to [`TokenKind::Eot`] only to keep the match exhaustive.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Real(_) => TokenKind::Real,
            Self::Home => TokenKind::Home,
            Self::PenUp => TokenKind::PenUp,
            Self::PenDown => TokenKind::PenDown,
            Self::Forward => TokenKind::Forward,
            Self::Left => TokenKind::Left,
            Self::Right => TokenKind::Right,
            Self::PushState => TokenKind::PushState,
            Self::PopState => TokenKind::PopState,
            Self::While => TokenKind::While,
            Self::Do => TokenKind::Do,
            Self::Od => TokenKind::Od,
            Self::If => TokenKind::If,
            Self::Then => TokenKind::Then,
            Self::Elsif => TokenKind::Elsif,
            Self::Else => TokenKind::Else,
            Self::Fi => TokenKind::Fi,
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::Not => TokenKind::Not,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Equal => TokenKind::Equal,
            Self::NotEqual => TokenKind::NotEqual,
            Self::Less => TokenKind::Less,
            Self::Greater => TokenKind::Greater,
            Self::LessEqual => TokenKind::LessEqual,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Comment
            | Self::MultiLineComment
            | Self::NewLine
            | Self::Ignored
            | Self::Eot => TokenKind::Eot,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Real => "number",
            Self::Home => "HOME",
            Self::PenUp => "PENUP",
            Self::PenDown => "PENDOWN",
            Self::Forward => "FORWARD",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::PushState => "PUSHSTATE",
            Self::PopState => "POPSTATE",
            Self::While => "WHILE",
            Self::Do => "DO",
            Self::Od => "OD",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Elsif => "ELSIF",
            Self::Else => "ELSE",
            Self::Fi => "FI",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Identifier => "identifier",
            Self::Assign => ":=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Eot => "end of text",
        };
        write!(f, "{text}")
    }
}

/// Found tokens print their attribute; everything else prints its spelling.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Real(value) => write!(f, "{value}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f32)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f32> {
    lex.slice().parse().ok()
}

/// A pull-based supplier of tokens for the parser.
///
/// Each call to [`TokenSource::next_token`] yields exactly one token; once the
/// input is exhausted the source must keep answering [`Token::Eot`].
pub trait TokenSource {
    /// Produces the next token.
    ///
    /// # Errors
    /// Returns [`ParseErrorKind::InvalidCharacter`] when the input at the
    /// current position does not form any token.
    fn next_token(&mut self) -> Result<Token, ParseErrorKind>;

    /// The line the source is currently positioned on, starting at 1.
    fn line(&self) -> usize;
}

/// The `logos`-backed token source for turtle programs.
///
/// ## Example
/// ```
/// use turtlec::interpreter::lexer::{Lexer, Token, TokenSource};
///
/// let mut lexer = Lexer::new("FORWARD 10\nLEFT 90");
///
/// assert_eq!(lexer.next_token().unwrap(), Token::Forward);
/// assert_eq!(lexer.next_token().unwrap(), Token::Real(10.0));
/// assert_eq!(lexer.next_token().unwrap(), Token::Left);
/// assert_eq!(lexer.line(), 2);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, positioned on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras::default()) }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, ParseErrorKind> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(())) => {
                Err(ParseErrorKind::InvalidCharacter { slice: self.inner.slice().to_string() })
            },
            None => Ok(Token::Eot),
        }
    }

    fn line(&self) -> usize {
        self.inner.extras.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().expect("lexing failed");
            if token == Token::Eot {
                break;
            }
            out.push(token);
        }
        out
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(tokens("WHILE WHILEX OD odd"),
                   vec![Token::While,
                        Token::Identifier("WHILEX".to_string()),
                        Token::Od,
                        Token::Identifier("odd".to_string())]);
    }

    #[test]
    fn operators_prefer_longest_match() {
        assert_eq!(tokens("x := a <= b <> c >= d < e > f = g"),
                   vec![Token::Identifier("x".to_string()),
                        Token::Assign,
                        Token::Identifier("a".to_string()),
                        Token::LessEqual,
                        Token::Identifier("b".to_string()),
                        Token::NotEqual,
                        Token::Identifier("c".to_string()),
                        Token::GreaterEqual,
                        Token::Identifier("d".to_string()),
                        Token::Less,
                        Token::Identifier("e".to_string()),
                        Token::Greater,
                        Token::Identifier("f".to_string()),
                        Token::Equal,
                        Token::Identifier("g".to_string())]);
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(tokens("12 12.5 .5 3. 1e3 2.5E-2"),
                   vec![Token::Real(12.0),
                        Token::Real(12.5),
                        Token::Real(0.5),
                        Token::Real(3.0),
                        Token::Real(1000.0),
                        Token::Real(0.025)]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let mut lexer = Lexer::new("// first\nHOME /* two\nlines */ PENUP\n\nPENDOWN");
        assert_eq!(lexer.next_token().unwrap(), Token::Home);
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.next_token().unwrap(), Token::PenUp);
        assert_eq!(lexer.line(), 3);
        assert_eq!(lexer.next_token().unwrap(), Token::PenDown);
        assert_eq!(lexer.line(), 5);
    }

    #[test]
    fn block_comments_may_end_in_several_stars() {
        assert_eq!(tokens("/* banner **/ HOME /***/ PENUP /** a * b **\n*/ PENDOWN"),
                   vec![Token::Home, Token::PenUp, Token::PenDown]);
    }

    #[test]
    fn exhausted_source_keeps_yielding_eot() {
        let mut lexer = Lexer::new("HOME");
        assert_eq!(lexer.next_token().unwrap(), Token::Home);
        assert_eq!(lexer.next_token().unwrap(), Token::Eot);
        assert_eq!(lexer.next_token().unwrap(), Token::Eot);
    }

    #[test]
    fn unknown_character_is_reported() {
        let mut lexer = Lexer::new("HOME $");
        assert_eq!(lexer.next_token().unwrap(), Token::Home);
        assert_eq!(lexer.next_token(),
                   Err(ParseErrorKind::InvalidCharacter { slice: "$".to_string() }));
    }

    #[test]
    fn found_tokens_display_their_attribute() {
        assert_eq!(Token::Identifier("size".to_string()).to_string(), "size");
        assert_eq!(Token::Real(2.5).to_string(), "2.5");
        assert_eq!(Token::Od.to_string(), "OD");
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    }
}
