//! # turtlec
//!
//! turtlec compiles a small imperative language for turtle graphics into a
//! linear sequence of device commands. Programs are parsed into an abstract
//! syntax tree and then executed against a variable environment; every
//! turtle action executed emits one command.
//!
//! ```text
//! size := 10
//! PENDOWN
//! WHILE size < 40 DO
//!     FORWARD size RIGHT 90
//!     size := size + 10
//! OD
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use log::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        command::{Command, CommandSink},
        environment::{Environment, Variables},
        evaluator::core::EvalResult,
        lexer::Lexer,
        parser::core::Parser,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the closed `Expr` and `Stmt` enums that represent a
/// program as a tree. The AST is built by the parser and walked by the
/// evaluator; each node owns its children exclusively.
pub mod ast;
/// Provides error types for parsing and execution.
///
/// # Responsibilities
/// - Defines structured syntax errors that callers can branch on by kind.
/// - Defines runtime errors raised while executing a program.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates lexing, parsing and execution.
///
/// This module ties together the token source, the parser, the evaluator,
/// the variable environment and the command sink.
pub mod interpreter;

/// Parses `source` into a program without executing it.
///
/// # Errors
/// Returns the first syntax error, annotated with its line.
///
/// # Examples
/// ```
/// use turtlec::parse_program;
///
/// assert!(parse_program("FORWARD 10 RIGHT 90").is_ok());
///
/// let error = parse_program("WHILE x < 3 DO\nFORWARD 1").unwrap_err();
/// assert_eq!(error.to_string(), "2: Unexpected token 'end of text', Expecting 'OD'");
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Executes a parsed program, sending every emitted command to `sink`.
///
/// # Errors
/// Returns the first runtime error; commands emitted before it remain in the
/// sink.
pub fn execute_program<E, S>(program: &Program, env: &mut E, sink: &mut S) -> EvalResult<()>
    where E: Environment + ?Sized,
          S: CommandSink + ?Sized
{
    program.execute(env, sink)
}

/// Parses and executes `source`, returning the emitted commands.
///
/// The environment is both the initial state and, afterwards, the final one,
/// so callers can inspect variables once the program has run.
///
/// # Errors
/// Returns an error if parsing fails or if execution raises a runtime error.
///
/// # Examples
/// ```
/// use turtlec::{compile, interpreter::{command::Command, environment::Variables}};
///
/// let mut env = Variables::new();
/// let commands = compile("x := 2 + 3 * 4 FORWARD x", &mut env).unwrap();
///
/// assert_eq!(commands, vec![Command::Move(14.0)]);
///
/// // Unbound variables are rejected by the default environment.
/// assert!(compile("FORWARD y", &mut Variables::new()).is_err());
/// ```
pub fn compile(source: &str, env: &mut Variables) -> Result<Vec<Command>, Box<dyn std::error::Error>> {
    let program = parse_program(source)?;

    let mut commands = Vec::new();
    execute_program(&program, env, &mut commands)?;

    debug!("execution emitted {} command(s), {} variable(s) bound",
           commands.len(),
           env.len());
    for (name, value) in env.iter() {
        debug!("final binding {name} = {value}");
    }

    Ok(commands)
}
