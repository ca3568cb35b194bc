/// Core evaluation logic.
///
/// Contains the evaluation result type, the numeric encoding of booleans and
/// the dispatch of [`crate::ast::Expr::eval`] over expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Arithmetic, short-circuiting logical connectives and comparisons.
pub mod binary;

/// Unary operator evaluation.
///
/// Arithmetic negation and logical NOT.
pub mod unary;

/// Statement execution.
///
/// Implements [`crate::ast::Stmt::execute`] and
/// [`crate::ast::Program::execute`]: assignments, loops, conditionals and the
/// emission of turtle commands.
pub mod statement;
