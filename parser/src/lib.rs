pub use error::ParsingError;
pub use instruction::{Instruction, Opcode};
pub use opt::OptimizationOptions;
pub use program::{Iter, Program};

pub mod codegen;
pub mod filter;
pub mod idiom;

mod error;
mod instruction;
mod opt;
mod program;

use tracing::debug;

/// Runs the whole front end: filter, fold idioms, filter again, generate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parser<'a> {
    contents: &'a [u8],
    options: OptimizationOptions,
}

impl<'a> Parser<'a> {
    pub fn new(contents: &'a [u8]) -> Self {
        Self {
            contents,
            options: OptimizationOptions::all(),
        }
    }

    pub fn with_options(self, options: OptimizationOptions) -> Self {
        Self { options, ..self }
    }

    pub fn parse(self) -> Result<Program, ParsingError> {
        let code = filter::filter(self.contents, filter::PRIMITIVES);
        debug!(source = self.contents.len(), filtered = code.len(), "filtered source");

        let code = idiom::collapse(&code, &self.options);
        debug!(collapsed = code.len(), "folded idioms");

        let program = codegen::generate(&code, &self.options)?;
        debug!(
            slots = program.len(),
            live = program.iter().count(),
            "generated program"
        );

        Ok(program)
    }
}
