use log::trace;

use super::code_table::CodeTable;
use super::huffman_tree::HuffmanTree;
use crate::error::{Error, Result};

/// Encode a sequence of symbols as a single bit-string: the concatenation,
/// in input order, of each symbol's code from the table. Pure function -
/// the output length is the sum of the per-symbol code lengths.
///
/// Fails with `SymbolNotInTable` on the first input symbol that has no code
/// (it did not appear, or appeared with zero frequency, in the frequency
/// table the tree was built from). Nothing partial is returned.
pub fn encode(table: &CodeTable, src: &[u8]) -> Result<String> {
    let mut bits = String::new();
    for &symbol in src {
        match table.code(symbol) {
            Some(code) => bits.push_str(code),
            None => return Err(Error::SymbolNotInTable { symbol }),
        }
    }
    trace!("Encoded {} symbols into {} bits", src.len(), bits.len());
    Ok(bits)
}

/// Decode a bit-string by walking the tree from the root: '0' moves to the
/// left child, '1' to the right, and reaching a leaf emits its symbol and
/// resets the walk to the root. The decoded count is the returned vector's
/// length.
///
/// Bits exhausted while the walk sits at an interior node are discarded
/// without complaint: the packer pads the final byte with zero bits at
/// encode time, and the true decoded length is tracked by the caller. A
/// bit-string truncated mid-code by other means is indistinguishable from
/// that padding and is dropped the same way.
///
/// Fails with `InvalidTree` if the tree does not satisfy the leaf/interior
/// invariant.
pub fn decode(tree: &HuffmanTree, bits: &str) -> Result<Vec<u8>> {
    if !tree.is_valid() {
        return Err(Error::InvalidTree);
    }

    let mut decoded = Vec::new();
    let mut cursor = tree;
    let mut pending = 0_usize; //bits consumed since the last emitted symbol

    for &bit in bits.as_bytes() {
        if let HuffmanTree::Interior { left, right, .. } = cursor {
            cursor = if bit == b'1' {
                right.as_ref()
            } else {
                left.as_ref()
            };
        }
        pending += 1;
        if let HuffmanTree::Leaf { symbol, .. } = cursor {
            decoded.push(*symbol);
            cursor = tree;
            pending = 0;
        }
    }

    if pending > 0 {
        trace!("Discarded {} trailing padding bits", pending);
    }
    trace!("Decoded {} symbols from {} bits", decoded.len(), bits.len());
    Ok(decoded)
}
