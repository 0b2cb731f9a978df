//! Error types for huffman coding operations.

use thiserror::Error;

/// Result type alias for huffman coding operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by tree construction, code derivation, encoding and
/// decoding. Every failing operation is deterministic and pure, so there is
/// no retry policy here - recovery belongs to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Tree construction was given fewer than two distinct symbols with
    /// non-zero frequency. A code cannot be built from less, since every
    /// interior node needs two children.
    #[error("cannot build a code from {found} non-zero frequency symbols (need at least 2)")]
    InsufficientSymbols { found: usize },

    /// Encoding was asked to encode a symbol that has no entry in the code
    /// table. The symbol did not appear, or appeared with zero frequency,
    /// in the frequency table the tree was built from.
    #[error("symbol {symbol:#04x} has no entry in the code table")]
    SymbolNotInTable { symbol: u8 },

    /// A tree failed the leaf/interior invariant check before decoding or
    /// code derivation. Signals caller-supplied data corruption and is
    /// never silently repaired.
    #[error("huffman tree fails the leaf/interior invariant")]
    InvalidTree,
}
