use std::{
    fmt::Display,
    io::{self, Write},
    ops::Index,
};

use crate::{Instruction, Opcode};

/// Position-keyed instruction array produced by code generation.
///
/// Holds one slot per collapsed source position plus a trailing
/// [`Opcode::Halt`] slot, so every jump lands inside the array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    slots: Box<[Instruction]>,
}

impl Program {
    pub(crate) fn from_slots(slots: Vec<Instruction>) -> Self {
        debug_assert_eq!(slots.last(), Some(&Instruction::HALT));

        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Number of collapsed source positions, not counting the halt slot.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, position: usize) -> Option<&Instruction> {
        self.slots.get(position)
    }

    pub fn slots(&self) -> &[Instruction] {
        &self.slots
    }

    /// Live instructions in program order, paired with their positions.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            program: self,
            position: 0,
        }
    }

    /// Writes one line per live slot: position, opcode symbol and offset.
    pub fn dump(&self, mut out: impl Write) -> io::Result<()> {
        for (position, instruction) in self.iter() {
            writeln!(
                out,
                "{position:>8}  {}  {:>6}",
                instruction.opcode.symbol() as char,
                instruction.offset
            )?;
        }

        Ok(())
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iter()
            .try_for_each(|(_, instruction)| write!(f, "{instruction}"))
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a> {
    program: &'a Program,
    position: usize,
}

impl Iterator for Iter<'_> {
    type Item = (usize, Instruction);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        let instruction = *self.program.get(position)?;

        if instruction.opcode == Opcode::Halt {
            return None;
        }

        self.position += instruction.stride();

        Some((position, instruction))
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = (usize, Instruction);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
