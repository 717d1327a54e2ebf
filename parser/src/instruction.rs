use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    JumpIfZero,
    JumpIfNotZero,
    Out,
    In,

    /// `[-]`
    Clear,
    /// `[->+<]` and `[>+<-]`
    TransferRight,
    /// `[-<+>]` and `[<+>-]`
    TransferLeft,
    /// `<-`
    DecrementLeft,

    /// Interior slot of a contracted run, never executed.
    Dead,
    /// Terminal slot placed one past the last instruction.
    Halt,
}

impl Opcode {
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        use Opcode::*;

        Some(match symbol {
            b'>' => MoveRight,
            b'<' => MoveLeft,
            b'+' => Increment,
            b'-' => Decrement,
            b'[' => JumpIfZero,
            b']' => JumpIfNotZero,
            b'.' => Out,
            b',' => In,
            b'!' => Clear,
            b'@' => TransferRight,
            b'#' => TransferLeft,
            b'$' => DecrementLeft,
            _ => return None,
        })
    }

    pub const fn symbol(self) -> u8 {
        use Opcode::*;

        match self {
            MoveRight => b'>',
            MoveLeft => b'<',
            Increment => b'+',
            Decrement => b'-',
            JumpIfZero => b'[',
            JumpIfNotZero => b']',
            Out => b'.',
            In => b',',
            Clear => b'!',
            TransferRight => b'@',
            TransferLeft => b'#',
            DecrementLeft => b'$',
            Dead => b' ',
            Halt => b'_',
        }
    }

    /// Whether consecutive copies of this opcode are contracted into one instruction.
    pub const fn is_repeatable(self) -> bool {
        matches!(
            self,
            Opcode::MoveRight | Opcode::MoveLeft | Opcode::Increment | Opcode::Decrement
        )
    }
}

/// One slot of the generated program.
///
/// The meaning of `offset` depends on the opcode: a run length for the
/// repeatable opcodes, the signed distance to the matching bracket for
/// `JumpIfZero`/`JumpIfNotZero`, and an implicit `1` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub opcode: Opcode,
    pub offset: isize,
}

impl Instruction {
    pub const DEAD: Self = Self::new(Opcode::Dead, 1);
    pub const HALT: Self = Self::new(Opcode::Halt, 0);

    pub const fn new(opcode: Opcode, offset: isize) -> Self {
        Self { opcode, offset }
    }

    pub const fn unit(opcode: Opcode) -> Self {
        Self::new(opcode, 1)
    }

    /// How far a linear walk advances past this slot.
    pub const fn stride(&self) -> usize {
        if self.opcode.is_repeatable() {
            self.offset.unsigned_abs()
        } else {
            1
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Opcode::*;

        match self.opcode {
            MoveRight | MoveLeft | Increment | Decrement => {
                let symbol = self.opcode.symbol() as char;

                write!(f, "{}", symbol.to_string().repeat(self.stride()))
            }
            JumpIfZero => write!(f, "["),
            JumpIfNotZero => write!(f, "]"),
            Out => write!(f, "."),
            In => write!(f, ","),
            Clear => write!(f, "[-]"),
            TransferRight => write!(f, "[->+<]"),
            TransferLeft => write!(f, "[-<+>]"),
            DecrementLeft => write!(f, "<-"),
            Dead | Halt => Ok(()),
        }
    }
}
