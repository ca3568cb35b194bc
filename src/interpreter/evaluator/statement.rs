use log::trace;

use crate::{
    ast::{Program, Stmt},
    interpreter::{
        command::{Command, CommandSink},
        environment::Environment,
        evaluator::core::EvalResult,
    },
};

impl Stmt {
    /// Executes the statement for its effect.
    ///
    /// Assignments update `env`; turtle actions emit exactly one command to
    /// `sink`. Loops and conditionals recurse into their bodies depth-first.
    ///
    /// # Errors
    /// Any evaluation error or sink failure aborts execution and is returned
    /// unchanged. Commands emitted before the failure stay in the sink.
    ///
    /// # Example
    /// ```
    /// use turtlec::{
    ///     ast::{Expr, Stmt},
    ///     interpreter::{command::Command, environment::Variables},
    /// };
    ///
    /// let mut env = Variables::new();
    /// let mut commands: Vec<Command> = Vec::new();
    ///
    /// Stmt::Right(Expr::Constant(90.0)).execute(&mut env, &mut commands).unwrap();
    ///
    /// assert_eq!(commands, vec![Command::Rotate(-90.0)]);
    /// ```
    pub fn execute<E, S>(&self, env: &mut E, sink: &mut S) -> EvalResult<()>
        where E: Environment + ?Sized,
              S: CommandSink + ?Sized
    {
        match self {
            Self::Assign { name, value } => {
                let value = value.eval(&*env)?;
                env.put(name, value);
                Ok(())
            },
            Self::Block(statements) => {
                for statement in statements {
                    statement.execute(env, sink)?;
                }
                Ok(())
            },
            Self::While { condition, body } => {
                let mut iterations: u64 = 0;
                while condition.eval_condition(&*env)? {
                    iterations += 1;
                    trace!("while iteration {iterations}");
                    body.execute(env, sink)?;
                }
                Ok(())
            },
            Self::If { condition,
                       body,
                       else_branch, } => {
                if condition.eval_condition(&*env)? {
                    body.execute(env, sink)
                } else if let Some(else_branch) = else_branch {
                    else_branch.execute(env, sink)
                } else {
                    Ok(())
                }
            },
            Self::Home => sink.emit(Command::Home),
            Self::PenUp => sink.emit(Command::PenUp),
            Self::PenDown => sink.emit(Command::PenDown),
            Self::PushState => sink.emit(Command::PushState),
            Self::PopState => sink.emit(Command::PopState),
            Self::Forward(distance) => sink.emit(Command::Move(distance.eval(&*env)?)),
            Self::Left(angle) => sink.emit(Command::Rotate(angle.eval(&*env)?)),
            Self::Right(angle) => sink.emit(Command::Rotate(-angle.eval(&*env)?)),
        }
    }
}

impl Program {
    /// Executes every top-level statement in order.
    ///
    /// # Errors
    /// Stops at the first failing statement and returns its error.
    pub fn execute<E, S>(&self, env: &mut E, sink: &mut S) -> EvalResult<()>
        where E: Environment + ?Sized,
              S: CommandSink + ?Sized
    {
        for statement in &self.statements {
            statement.execute(env, sink)?;
        }
        Ok(())
    }
}
