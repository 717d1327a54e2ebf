use tracing::trace;

use crate::{
    filter::{filter, WITH_SENTINELS},
    Opcode, OptimizationOptions,
};

/// Placeholder written over the tail of a folded idiom, removed by the second filter pass.
pub const FILLER: u8 = b'0';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idiom {
    pub pattern: &'static [u8],
    pub opcode: Opcode,
}

/// Checked in order at every cursor position; the first match wins.
pub const IDIOMS: &[Idiom] = &[
    Idiom::new(b"<-", Opcode::DecrementLeft),
    Idiom::new(b"[-]", Opcode::Clear),
    Idiom::new(b"[->+<]", Opcode::TransferRight),
    Idiom::new(b"[>+<-]", Opcode::TransferRight),
    Idiom::new(b"[-<+>]", Opcode::TransferLeft),
    Idiom::new(b"[<+>-]", Opcode::TransferLeft),
];

impl Idiom {
    const fn new(pattern: &'static [u8], opcode: Opcode) -> Self {
        Self { pattern, opcode }
    }

    fn enabled(&self, options: &OptimizationOptions) -> bool {
        match self.opcode {
            Opcode::DecrementLeft => options.step_left,
            Opcode::Clear => options.clear,
            Opcode::TransferRight | Opcode::TransferLeft => options.transfer,
            _ => false,
        }
    }
}

/// Replaces every idiom found by a single left-to-right scan with its sentinel
/// followed by filler, keeping the buffer length unchanged.
pub fn rewrite(code: &[u8], options: &OptimizationOptions) -> Vec<u8> {
    let mut rewritten = code.to_vec();
    let mut cursor = 0;

    while cursor < code.len() {
        let rest = &code[cursor..];
        let found = IDIOMS
            .iter()
            .filter(|idiom| idiom.enabled(options))
            .find(|idiom| rest.starts_with(idiom.pattern));

        match found {
            Some(idiom) => {
                let end = cursor + idiom.pattern.len();

                trace!(at = cursor, opcode = ?idiom.opcode, "folded idiom");

                rewritten[cursor] = idiom.opcode.symbol();
                rewritten[cursor + 1..end].fill(FILLER);
                cursor = end;
            }
            None => cursor += 1,
        }
    }

    rewritten
}

/// Rewrites idioms and drops the filler, yielding a dense instruction string.
pub fn collapse(code: &[u8], options: &OptimizationOptions) -> Vec<u8> {
    if !options.folds_idioms() {
        return code.to_vec();
    }

    filter(&rewrite(code, options), WITH_SENTINELS)
}
