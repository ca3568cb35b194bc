/// Parsing errors.
///
/// Defines the errors raised while turning tokens into a syntax tree. The
/// grammar functions produce a line-free [`ParseErrorKind`]; the parser entry
/// point attaches the line number and returns a [`ParseError`].
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while executing a program: unbound variables,
/// division by zero and failures of the command sink.
pub mod runtime_error;

pub use parse_error::{GrammarRule, ParseError, ParseErrorKind};
pub use runtime_error::RuntimeError;
