use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, from_bool, is_truthy},
    },
};

/// Evaluates a unary operation.
///
/// Supported operators:
/// - `Negate`: arithmetic negation.
/// - `Not`: logical negation; `0` becomes `1` and any non-zero value becomes
///   `0`.
///
/// # Example
/// ```
/// use turtlec::{
///     ast::{Expr, UnaryOperator},
///     interpreter::{environment::Variables, evaluator::unary::eval_unary},
/// };
///
/// let env = Variables::new();
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Expr::Constant(5.0), &env).unwrap(), -5.0);
/// assert_eq!(eval_unary(UnaryOperator::Not, &Expr::Constant(0.0), &env).unwrap(), 1.0);
/// assert_eq!(eval_unary(UnaryOperator::Not, &Expr::Constant(3.0), &env).unwrap(), 0.0);
/// ```
pub fn eval_unary<E: Environment + ?Sized>(op: UnaryOperator,
                                           operand: &Expr,
                                           env: &E)
                                           -> EvalResult<f32> {
    let value = operand.eval(env)?;

    match op {
        UnaryOperator::Negate => Ok(-value),
        UnaryOperator::Not => Ok(from_bool(!is_truthy(value))),
    }
}
