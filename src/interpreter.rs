/// The command module defines the turtle device's instruction set.
///
/// Execution emits [`command::Command`] values into a [`command::CommandSink`],
/// which either collects them or writes them in the device's line-based text
/// protocol.
pub mod command;
/// The environment module stores variable bindings during execution.
///
/// # Responsibilities
/// - Defines the [`environment::Environment`] trait the evaluator talks to.
/// - Provides [`environment::Variables`], a hash map with a configurable
///   policy for names that were never assigned.
pub mod environment;
/// The evaluator module executes AST nodes and emits commands.
///
/// The evaluator walks the tree depth-first, left to right, evaluating
/// expressions to numbers and executing statements for their effect on the
/// environment and the command sink.
///
/// # Responsibilities
/// - Evaluates arithmetic, logical and relational expressions.
/// - Executes assignments, loops, conditionals and turtle actions.
/// - Reports runtime errors such as unbound variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with attributes.
/// - Tracks the current line for error reporting.
/// - Exposes the result through the pull-based
///   [`lexer::TokenSource`] trait.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over a single lookahead token. Each
/// grammar rule is one method; the first syntax error aborts the parse.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Encodes operator precedence in the call structure.
/// - Reports syntax errors annotated with line numbers.
pub mod parser;
