use rayon::prelude::*;

use crate::huffman_coding::huffman_tree::NUM_SYMBOLS;

/// Returns a frequency count of the input data: one count per possible byte
/// value, in symbol order, with zero meaning the byte never occurs. Built
/// once per input and read-only thereafter. Uses parallelism when the data
/// set is over 64k.
pub fn freqs(data: &[u8]) -> [u32; NUM_SYMBOLS] {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u32; NUM_SYMBOLS],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u32; NUM_SYMBOLS],
                |mut sums, freqs| {
                    sums.iter_mut().zip(&freqs).for_each(|(s, f)| *s += f);
                    sums
                },
            )
    } else {
        let mut freqs = [0_u32; NUM_SYMBOLS];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn counts_every_occurrence() {
        let counts = freqs(b"AABABBB");
        assert_eq!(counts[b'A' as usize], 3);
        assert_eq!(counts[b'B' as usize], 4);
        assert_eq!(counts[b'C' as usize], 0);
        assert_eq!(counts.iter().sum::<u32>(), 7);
    }

    #[test]
    fn empty_input_counts_nothing() {
        assert_eq!(freqs(&[]).iter().sum::<u32>(), 0);
    }

    #[test]
    fn parallel_path_matches_serial() {
        // Past 64k the rayon path kicks in - both must agree.
        let data: Vec<u8> = (0..70_000_u32).map(|i| (i % 251) as u8).collect();
        let par = freqs(&data);
        let mut serial = [0_u32; 256];
        data.iter().for_each(|&el| serial[el as usize] += 1);
        assert_eq!(par, serial);
    }
}
