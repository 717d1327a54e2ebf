/// Switches for the folding passes applied between filtering and code generation.
///
/// `contract` controls run-length encoding of `+ - < >`, the remaining flags
/// select which idiom families the rewriter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptimizationOptions {
    /// Encode runs of `+ - < >` as one instruction with a count.
    pub contract: bool,
    /// Fold `[-]` into a single clear.
    pub clear: bool,
    /// Fold `[->+<]`, `[>+<-]`, `[-<+>]` and `[<+>-]` into one move-and-add.
    pub transfer: bool,
    /// Fold `<-` into a single step-left-and-decrement.
    pub step_left: bool,
}

macro_rules! opt {
    ($name:ident, $with:ident) => {
        pub const fn $with(self) -> Self {
            Self {
                $name: true,
                ..self
            }
        }
    };
}

impl OptimizationOptions {
    pub const fn new() -> Self {
        Self {
            contract: false,
            clear: false,
            transfer: false,
            step_left: false,
        }
    }

    pub const fn all() -> Self {
        Self {
            contract: true,
            clear: true,
            transfer: true,
            step_left: true,
        }
    }

    pub const fn folds_idioms(&self) -> bool {
        self.clear || self.transfer || self.step_left
    }

    opt!(contract, with_contract);
    opt!(clear, with_clear);
    opt!(transfer, with_transfer);
    opt!(step_left, with_step_left);
}
