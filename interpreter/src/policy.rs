/// Value stored by `,` once the input is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum EofBehavior {
    #[default]
    #[value(help = "Store -1, like getc() into a signed byte")]
    MinusOne,
    #[value(help = "Store 0")]
    Zero,
    #[value(help = "Leave the cell unchanged")]
    Unchanged,
}

/// What happens when the pointer moves past either end of the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum BoundsPolicy {
    #[default]
    #[value(help = "Wrap around to the other end of the tape")]
    Wrap,
    #[value(help = "Stop with an error")]
    Strict,
}
