use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, from_bool},
    },
};

/// Evaluates a binary operation.
///
/// `AND` and `OR` short-circuit: the right operand is only evaluated when the
/// left one does not already decide the result. All other operators evaluate
/// left before right.
pub fn eval_binary<E: Environment + ?Sized>(left: &Expr,
                                            op: BinaryOperator,
                                            right: &Expr,
                                            env: &E)
                                            -> EvalResult<f32> {
    match op {
        BinaryOperator::And => {
            Ok(from_bool(left.eval_condition(env)? && right.eval_condition(env)?))
        },
        BinaryOperator::Or => {
            Ok(from_bool(left.eval_condition(env)? || right.eval_condition(env)?))
        },
        BinaryOperator::Add
        | BinaryOperator::Sub
        | BinaryOperator::Mul
        | BinaryOperator::Div => eval_arithmetic(op, left.eval(env)?, right.eval(env)?),
        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => {
            Ok(eval_comparison(op, left.eval(env)?, right.eval(env)?))
        },
    }
}

/// Applies an arithmetic operator to two values.
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] when dividing by zero.
///
/// # Example
/// ```
/// use turtlec::{ast::BinaryOperator, interpreter::evaluator::binary::eval_arithmetic};
///
/// assert_eq!(eval_arithmetic(BinaryOperator::Sub, 7.0, 2.5).unwrap(), 4.5);
/// assert!(eval_arithmetic(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_arithmetic(op: BinaryOperator, left: f32, right: f32) -> EvalResult<f32> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
        _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
    }
}

/// Compares two values, producing `1` for true and `0` for false.
///
/// # Example
/// ```
/// use turtlec::{ast::BinaryOperator, interpreter::evaluator::binary::eval_comparison};
///
/// assert_eq!(eval_comparison(BinaryOperator::LessEqual, 2.0, 2.0), 1.0);
/// assert_eq!(eval_comparison(BinaryOperator::NotEqual, 2.0, 2.0), 0.0);
/// ```
#[must_use]
pub fn eval_comparison(op: BinaryOperator, left: f32, right: f32) -> f32 {
    from_bool(match op {
                  BinaryOperator::Equal => left == right,
                  BinaryOperator::NotEqual => left != right,
                  BinaryOperator::Less => left < right,
                  BinaryOperator::Greater => left > right,
                  BinaryOperator::LessEqual => left <= right,
                  BinaryOperator::GreaterEqual => left >= right,
                  _ => unreachable!("eval_comparison used with non comparison operator"),
              })
}
