pub use error::RuntimeError;
pub use interpreter::Interpreter;
pub use policy::{BoundsPolicy, EofBehavior};
pub use profile::Profile;
pub use tape::Tape;

mod error;
mod interpreter;
mod policy;
mod profile;
mod tape;

/// Cells on the tape of the command-line interpreter.
pub const TAPE_LENGTH: usize = 30_000;
