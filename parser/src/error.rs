#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("bracket at instruction {0} is not closed")]
    UnclosedBracket(usize),
    #[error("bracket at instruction {0} doesn't have a corresponding opening bracket")]
    UnopenedBracket(usize),
}
