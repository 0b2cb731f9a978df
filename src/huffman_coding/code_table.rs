use log::trace;

use super::huffman_tree::{HuffmanTree, NUM_SYMBOLS};
use crate::error::{Error, Result};

/// Code table mapping each symbol present in the tree to its bit-string
/// code. This is a dense array indexed by byte value, not a general map -
/// the alphabet is the fixed set of 256 byte values. Symbols absent from
/// the tree have no entry and must never be looked up by the encoder.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<String>; NUM_SYMBOLS],
}

impl CodeTable {
    /// The code for a symbol, if the symbol appeared as a leaf in the tree.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes[symbol as usize].as_deref()
    }

    /// Number of symbols that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, code)| code.as_deref().map(|code| (i as u8, code)))
    }
}

/// Derive the code table from a tree in a single depth-first traversal.
/// Following the left child appends '0' to the path, the right child '1',
/// and the path from the root to each leaf is that symbol's code. The tree
/// construction precondition rules out a root-only tree, so every derived
/// code has length >= 1. No code is a prefix of another - the tree shape
/// guarantees it, since symbols sit only at leaves.
///
/// Fails with `InvalidTree` if the tree does not satisfy the leaf/interior
/// invariant.
pub fn build_code_table(tree: &HuffmanTree) -> Result<CodeTable> {
    if !tree.is_valid() {
        return Err(Error::InvalidTree);
    }
    const NONE: Option<String> = None;
    let mut codes = [NONE; NUM_SYMBOLS];
    walk(tree, String::new(), &mut codes);
    Ok(CodeTable { codes })
}

/// Recursive traversal carrying the path-so-far by value. Each leaf takes
/// ownership of the path built down to it; interior nodes clone the path
/// once for the left branch and hand the original to the right.
fn walk(node: &HuffmanTree, path: String, codes: &mut [Option<String>; NUM_SYMBOLS]) {
    match node {
        HuffmanTree::Leaf { symbol, .. } => {
            trace!("Symbol {:#04x} coded as {}", symbol, path);
            codes[*symbol as usize] = Some(path);
        }
        HuffmanTree::Interior { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            walk(left, left_path, codes);
            let mut right_path = path;
            right_path.push('1');
            walk(right, right_path, codes);
        }
    }
}
