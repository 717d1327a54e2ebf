/// The eight instruction characters of the source language.
pub const PRIMITIVES: &[u8] = b"[]<>+-.,";

/// Primitives plus the sentinels the idiom rewriter substitutes for composite opcodes.
pub const WITH_SENTINELS: &[u8] = b"[]<>+-.,$!@#";

/// Keeps only the bytes of `source` that appear in `keep`, preserving their order.
pub fn filter(source: &[u8], keep: &[u8]) -> Vec<u8> {
    source
        .iter()
        .copied()
        .filter(|byte| keep.contains(byte))
        .collect()
}
