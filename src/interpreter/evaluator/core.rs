use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The numeric encoding of `true`.
pub const TRUE: f32 = 1.0;
/// The numeric encoding of `false`.
pub const FALSE: f32 = 0.0;

/// Interprets a number as a condition: any non-zero value is true.
#[must_use]
pub fn is_truthy(value: f32) -> bool {
    value != FALSE
}

/// Encodes a boolean as a number.
#[must_use]
pub const fn from_bool(value: bool) -> f32 {
    if value { TRUE } else { FALSE }
}

impl Expr {
    /// Evaluates the expression against `env`.
    ///
    /// Variables are looked up when evaluated, never at parse time, so the
    /// same tree yields different results as the environment changes.
    ///
    /// # Errors
    /// Propagates lookup failures from the environment and reports
    /// [`RuntimeError::DivisionByZero`].
    ///
    /// # Example
    /// ```
    /// use turtlec::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::environment::{Environment, Variables},
    /// };
    ///
    /// let mut env = Variables::new();
    /// env.put("x", 4.0);
    ///
    /// let expr = Expr::binary(Expr::variable("x"), BinaryOperator::Mul, Expr::Constant(2.5));
    /// assert_eq!(expr.eval(&env).unwrap(), 10.0);
    /// ```
    pub fn eval<E: Environment + ?Sized>(&self, env: &E) -> EvalResult<f32> {
        match self {
            Self::Variable(name) => env.get(name),
            Self::Constant(value) => Ok(*value),
            Self::Unary { op, expr } => eval_unary(*op, expr, env),
            Self::Binary { left, op, right } => eval_binary(left, *op, right, env),
        }
    }

    /// Evaluates the expression as a condition.
    pub fn eval_condition<E: Environment + ?Sized>(&self, env: &E) -> EvalResult<bool> {
        Ok(is_truthy(self.eval(env)?))
    }
}
