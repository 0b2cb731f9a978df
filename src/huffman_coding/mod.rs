//! The huffman_coding module builds the prefix-free code at the heart of the
//! library, and converts between byte sequences and bit-strings with it.
//!
//! Huffman coding assigns frequent byte values smaller bit codes and less
//! frequent byte values longer bit codes. The code is derived from a binary
//! tree built bottom-up out of the frequency counts: the two lightest nodes
//! are merged under a new interior node until a single root remains, and the
//! path from the root to each leaf (left = '0', right = '1') is that
//! symbol's code. The tree shape guarantees no code is a prefix of another.
//!
//! The tree is built once per input and never mutated afterwards. Code
//! derivation and decoding borrow it, so the same tree can serve any number
//! of encode/decode calls.
//!
//! The process of encoding and decoding is inherently sequential and does
//! not benefit from multithreading.
//!

pub mod code_table;
pub mod codec;
pub mod huffman_tree;
