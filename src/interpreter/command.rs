use std::io::Write;

use log::trace;

use crate::interpreter::evaluator::core::EvalResult;

/// A primitive instruction for the turtle-graphics device.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// Return to the origin (`H`).
    Home,
    /// Lift the pen (`U`).
    PenUp,
    /// Lower the pen (`D`).
    PenDown,
    /// Save position and heading (`[`).
    PushState,
    /// Restore the last saved state (`]`).
    PopState,
    /// Move forward by the given distance (`M <distance>`).
    Move(f32),
    /// Turn counter-clockwise by the given angle (`R <angle>`).
    ///
    /// Right turns are encoded as negative angles.
    Rotate(f32),
}

/// The device's text protocol, one record per command.
///
/// Numbers use the shortest representation that reads back as the same
/// `f32`, so `20.0` is written as `20`.
///
/// ## Example
/// ```
/// use turtlec::interpreter::command::Command;
///
/// assert_eq!(Command::Move(20.0).to_string(), "M 20");
/// assert_eq!(Command::Rotate(-22.5).to_string(), "R -22.5");
/// assert_eq!(Command::PushState.to_string(), "[");
/// ```
impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "H"),
            Self::PenUp => write!(f, "U"),
            Self::PenDown => write!(f, "D"),
            Self::PushState => write!(f, "["),
            Self::PopState => write!(f, "]"),
            Self::Move(distance) => write!(f, "M {distance}"),
            Self::Rotate(angle) => write!(f, "R {angle}"),
        }
    }
}

/// Receives the commands emitted while a program executes, in order.
pub trait CommandSink {
    /// Accepts one command.
    ///
    /// # Errors
    /// [`crate::error::RuntimeError::Output`] when the command could not be
    /// delivered.
    fn emit(&mut self, command: Command) -> EvalResult<()>;
}

/// Collects commands in memory.
impl CommandSink for Vec<Command> {
    fn emit(&mut self, command: Command) -> EvalResult<()> {
        trace!("emit {command}");
        self.push(command);
        Ok(())
    }
}

/// Writes each command as a newline-terminated line of text.
///
/// ## Example
/// ```
/// use turtlec::interpreter::command::{Command, CommandSink, TextSink};
///
/// let mut sink = TextSink::new(Vec::new());
/// sink.emit(Command::PenDown).unwrap();
/// sink.emit(Command::Move(1.5)).unwrap();
///
/// assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "D\nM 1.5\n");
/// ```
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    /// [`crate::error::RuntimeError::Output`] if flushing fails.
    pub fn flush(&mut self) -> EvalResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CommandSink for TextSink<W> {
    fn emit(&mut self, command: Command) -> EvalResult<()> {
        trace!("emit {command}");
        writeln!(self.writer, "{command}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn every_command_has_its_record() {
        let records: Vec<String> = [Command::Home,
                                    Command::PenUp,
                                    Command::PenDown,
                                    Command::PushState,
                                    Command::PopState,
                                    Command::Move(3.25),
                                    Command::Rotate(-90.0)].iter()
                                                           .map(ToString::to_string)
                                                           .collect();

        assert_eq!(records, ["H", "U", "D", "[", "]", "M 3.25", "R -90"]);
    }

    #[test]
    fn floats_round_trip_through_text() {
        let value = 0.1_f32 + 0.2_f32;
        let text = Command::Move(value).to_string();
        let parsed: f32 = text.trim_start_matches("M ").parse().unwrap();

        assert_eq!(parsed.to_bits(), value.to_bits());
    }

    #[test]
    fn write_failures_become_output_errors() {
        let mut sink = TextSink::new(BrokenPipe);

        match sink.emit(Command::Home) {
            Err(RuntimeError::Output { details }) => assert!(details.contains("pipe closed")),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
