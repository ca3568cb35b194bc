/// Parser state, token consumption and the program entry point.
///
/// Holds the [`core::Parser`] with its single lookahead token, the `match`
/// primitive that is the only place tokens are consumed, and
/// [`core::Parser::parse`], which attaches line numbers to errors.
pub mod core;

/// Block parsing.
///
/// Parses maximal runs of adjacent statements and owns the set of tokens
/// that can start a statement.
pub mod block;

/// Statement parsing.
///
/// Assignments, `WHILE` loops, `IF`/`ELSIF`/`ELSE` chains and turtle actions.
pub mod statement;

/// Binary operator parsing.
///
/// The left-associative precedence ladder for arithmetic (`+ -`, `* /`) and
/// boolean (`OR`, `AND`) operators, plus the mandatory comparison.
pub mod binary;

/// Unary and primary parsing.
///
/// Arithmetic factors (signs, parentheses, variables, literals) and boolean
/// factors (`NOT`, parenthesized conditions).
pub mod unary;
