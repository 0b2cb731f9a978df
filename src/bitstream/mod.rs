//! The bitstream module converts between the ASCII bit-string the encoder
//! produces and the dense byte buffers that get stored or transmitted.
//!
//! A bit-string carries one character per bit, so its length is exact but
//! its representation is eight times larger than it needs to be. Packing
//! groups the bits eight at a time, most significant bit first, and pads
//! the tail of the final byte with zero bits. Those padding bits carry no
//! information - the original bit length must be tracked out-of-band, and
//! unpacking is therefore given an explicit byte count rather than a
//! self-delimiting buffer.
//!
pub mod bitpacker;
