#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing a program.
pub enum RuntimeError {
    /// Tried to read a variable the environment does not know.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The command sink failed to accept a command.
    Output {
        /// Details reported by the underlying writer.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Runtime error: Unknown variable '{name}'."),
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::Output { details } => {
                write!(f, "Runtime error: Failed to write command: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        Self::Output { details: error.to_string() }
    }
}
