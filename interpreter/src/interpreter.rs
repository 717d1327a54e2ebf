use std::io::{ErrorKind, Read, Write};

use parser::{Instruction, Opcode, Program};
use tracing::debug;

use crate::{BoundsPolicy, EofBehavior, Profile, RuntimeError, Tape};

#[derive(Debug, Clone)]
pub struct Interpreter<const N: usize> {
    tape: Tape<N>,
    program: Program,
    instptr: usize,
    eof: EofBehavior,
    flush: bool,
    profile: Option<Profile>,
}

impl<const N: usize> Interpreter<N> {
    pub const fn new(program: Program) -> Self {
        Self {
            tape: Tape::new(BoundsPolicy::Wrap),
            program,
            instptr: 0,
            eof: EofBehavior::MinusOne,
            flush: false,
            profile: None,
        }
    }

    pub fn with_bounds(self, policy: BoundsPolicy) -> Self {
        Self {
            tape: Tape::new(policy),
            ..self
        }
    }

    pub fn with_eof(self, eof: EofBehavior) -> Self {
        Self { eof, ..self }
    }

    /// Flush the output after every `.` instead of only before reads and at exit.
    pub fn with_flush(self, flush: bool) -> Self {
        Self { flush, ..self }
    }

    pub fn with_profile(self, enabled: bool) -> Self {
        Self {
            profile: enabled.then(Profile::default),
            ..self
        }
    }

    pub fn tape(&self) -> &Tape<N> {
        &self.tape
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let stdout = std::io::stdout().lock();
        let stdin = std::io::stdin().lock();

        self.run_with(stdin, stdout)
    }

    pub fn run_with(
        &mut self,
        mut input: impl Read,
        mut output: impl Write,
    ) -> Result<(), RuntimeError> {
        while let Some(&Instruction { opcode, offset }) = self.program.get(self.instptr) {
            use Opcode::*;

            if opcode == Halt {
                break;
            }

            if let Some(profile) = self.profile.as_mut() {
                profile.record(opcode);
            }

            match opcode {
                MoveRight => self.shift(offset)?,
                MoveLeft => self.shift(-offset)?,
                Increment => self.tape.add(offset as i8),
                Decrement => self.tape.add((offset as i8).wrapping_neg()),
                JumpIfZero | JumpIfNotZero => {
                    let taken = match opcode {
                        JumpIfZero => self.tape.current() == 0,
                        _ => self.tape.current() != 0,
                    };

                    if taken {
                        self.instptr = self.instptr.wrapping_add_signed(offset);
                    }
                }
                Clear => self.tape.set(0),
                TransferRight => self.transfer(1)?,
                TransferLeft => self.transfer(-1)?,
                DecrementLeft => {
                    self.shift(-1)?;
                    self.tape.add(-1);
                }
                Out => {
                    output
                        .write_all(&[self.tape.current() as u8])
                        .map_err(RuntimeError::Write)?;

                    if self.flush {
                        output.flush().map_err(RuntimeError::Write)?;
                    }
                }
                In => {
                    output.flush().map_err(RuntimeError::Write)?;

                    match read_byte(&mut input).map_err(RuntimeError::Read)? {
                        Some(byte) => self.tape.set(byte as i8),
                        None => match self.eof {
                            EofBehavior::MinusOne => self.tape.set(-1),
                            EofBehavior::Zero => self.tape.set(0),
                            EofBehavior::Unchanged => {}
                        },
                    }
                }
                Dead | Halt => {}
            }

            self.instptr += match opcode {
                MoveRight | MoveLeft | Increment | Decrement => offset as usize,
                _ => 1,
            };
        }

        debug!(instptr = self.instptr, pointer = self.tape.pointer(), "halted");

        output.flush().map_err(RuntimeError::Write)
    }

    fn shift(&mut self, delta: isize) -> Result<(), RuntimeError> {
        let position = self.instptr;

        self.tape
            .shift(delta)
            .map_err(|pointer| RuntimeError::TapeBounds { position, pointer })
    }

    fn transfer(&mut self, delta: isize) -> Result<(), RuntimeError> {
        let position = self.instptr;

        self.tape
            .transfer(delta)
            .map_err(|pointer| RuntimeError::TapeBounds { position, pointer })
    }
}

/// Reads a single byte, `None` once the input is exhausted.
fn read_byte(input: &mut impl Read) -> std::io::Result<Option<u8>> {
    let mut buf = [0u8; 1];

    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
