#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("pointer left the tape at instruction {position} (would be cell {pointer})")]
    TapeBounds { position: usize, pointer: isize },
    #[error("failed to read from input")]
    Read(#[source] std::io::Error),
    #[error("failed to write to output")]
    Write(#[source] std::io::Error),
}
