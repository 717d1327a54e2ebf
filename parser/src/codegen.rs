use crate::{Instruction, Opcode, OptimizationOptions, ParsingError, Program};

/// Turns a collapsed instruction string into a position-keyed [`Program`].
///
/// Brackets receive opposite-signed distances to their partner, runs of a
/// repeatable opcode receive their length in the first slot and leave the rest
/// of the run as [`Opcode::Dead`].
pub fn generate(code: &[u8], options: &OptimizationOptions) -> Result<Program, ParsingError> {
    let mut slots = vec![Instruction::DEAD; code.len() + 1];
    slots[code.len()] = Instruction::HALT;

    let mut idx = 0;
    while let Some(&byte) = code.get(idx) {
        let Some(opcode) = Opcode::from_symbol(byte) else {
            idx += 1;
            continue;
        };

        match opcode {
            Opcode::JumpIfZero => {
                let distance = matching_close(code, idx)?;
                let offset = distance as isize;

                slots[idx] = Instruction::new(Opcode::JumpIfZero, offset);
                slots[idx + distance] = Instruction::new(Opcode::JumpIfNotZero, -offset);
                idx += 1;
            }
            Opcode::JumpIfNotZero => {
                // Already written by the scan from its opening bracket.
                if slots[idx].opcode != Opcode::JumpIfNotZero {
                    return Err(ParsingError::UnopenedBracket(idx));
                }

                idx += 1;
            }
            opcode if opcode.is_repeatable() => {
                let run = if options.contract {
                    code[idx..].iter().take_while(|&&next| next == byte).count()
                } else {
                    1
                };

                slots[idx] = Instruction::new(opcode, run as isize);
                idx += run;
            }
            opcode => {
                slots[idx] = Instruction::unit(opcode);
                idx += 1;
            }
        }
    }

    Ok(Program::from_slots(slots))
}

/// Distance from the bracket at `open` to its partner, found with a depth counter.
fn matching_close(code: &[u8], open: usize) -> Result<usize, ParsingError> {
    let mut depth = 0usize;

    for (distance, &byte) in code[open..].iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;

                if depth == 0 {
                    return Ok(distance);
                }
            }
            _ => {}
        }
    }

    Err(ParsingError::UnclosedBracket(open))
}
