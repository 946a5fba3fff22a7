//! Adler-32 rolling checksum for inbound and outbound network messages.
//!
//! The checksum detects transmission corruption only. It is trivially
//! forgeable and must never be treated as proof of authenticity.
//!
//! A result of `0` is the rejection sentinel: buffers larger than the
//! configured ceiling are not summed at all, and callers must treat `0` as
//! "do not trust this message" even though a genuine Adler-32 of zero is
//! theoretically possible.

/// Largest message the network layer will accept, in bytes.
pub const NETWORK_MESSAGE_MAX_SIZE: usize = 24590;

/// Largest prime below 2^16.
const ADLER_MODULUS: u32 = 65521;

/// Largest run of bytes that can be summed before `b` may overflow a `u32`.
const ADLER_BLOCK: usize = 5552;

/// Sentinel returned for buffers that exceed the size ceiling.
pub const CHECKSUM_REJECTED: u32 = 0;

/// Checksum calculator bound to a maximum message size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumEngine {
    max_message_size: usize,
}

impl ChecksumEngine {
    pub const fn new(max_message_size: usize) -> Self {
        Self { max_message_size }
    }

    pub const fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    /// Computes the Adler-32 checksum of `data`.
    ///
    /// Returns [`CHECKSUM_REJECTED`] without reading the buffer when it is
    /// longer than [`Self::max_message_size`].
    pub fn checksum(&self, data: &[u8]) -> u32 {
        if data.len() > self.max_message_size {
            tracing::debug!(
                len = data.len(),
                max = self.max_message_size,
                "checksum input exceeds message ceiling"
            );
            return CHECKSUM_REJECTED;
        }

        adler32(data)
    }

    /// Returns true when `expected` is a usable checksum and matches `data`.
    pub fn verify(&self, data: &[u8], expected: u32) -> bool {
        let actual = self.checksum(data);
        actual != CHECKSUM_REJECTED && actual == expected
    }
}

impl Default for ChecksumEngine {
    fn default() -> Self {
        Self::new(NETWORK_MESSAGE_MAX_SIZE)
    }
}

/// Checksums `data` against the default [`NETWORK_MESSAGE_MAX_SIZE`] ceiling.
pub fn checksum(data: &[u8]) -> u32 {
    ChecksumEngine::default().checksum(data)
}

fn adler32(data: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for block in data.chunks(ADLER_BLOCK) {
        for &byte in block {
            a += u32::from(byte);
            b += a;
        }
        a %= ADLER_MODULUS;
        b %= ADLER_MODULUS;
    }

    (b << 16) | a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_packs_initial_accumulators() {
        assert_eq!(checksum(&[]), 1);
    }

    #[test]
    fn matches_reference_adler32_vectors() {
        // Published Adler-32 values.
        assert_eq!(checksum(b"a"), 0x0062_0062);
        assert_eq!(checksum(b"abc"), 0x024d_0127);
        assert_eq!(checksum(b"Wikipedia"), 0x11e6_0398);
    }

    #[test]
    fn oversize_buffer_is_rejected_regardless_of_content() {
        let engine = ChecksumEngine::new(16);
        assert_eq!(engine.checksum(&[0u8; 17]), CHECKSUM_REJECTED);
        assert_eq!(engine.checksum(&[0xffu8; 17]), CHECKSUM_REJECTED);
        assert_ne!(engine.checksum(&[0u8; 16]), CHECKSUM_REJECTED);
    }

    #[test]
    fn default_ceiling_is_inclusive() {
        let at_limit = vec![7u8; NETWORK_MESSAGE_MAX_SIZE];
        let over_limit = vec![7u8; NETWORK_MESSAGE_MAX_SIZE + 1];
        assert_ne!(checksum(&at_limit), CHECKSUM_REJECTED);
        assert_eq!(checksum(&over_limit), CHECKSUM_REJECTED);
    }

    #[test]
    fn block_reduction_keeps_accumulators_in_range() {
        // Several full blocks of 0xff is the worst case for accumulator growth.
        let data = vec![0xffu8; ADLER_BLOCK * 4 + 3];
        let sum = checksum(&data);
        assert!(sum & 0xffff < ADLER_MODULUS);
        assert!(sum >> 16 < ADLER_MODULUS);
    }

    #[test]
    fn single_byte_change_alters_checksum() {
        let original = b"move north 3 tiles".to_vec();
        let mut corrupted = original.clone();
        corrupted[5] ^= 0x01;
        assert_ne!(checksum(&original), checksum(&corrupted));
    }

    #[test]
    fn verify_refuses_rejected_sentinel() {
        let engine = ChecksumEngine::new(4);
        assert!(!engine.verify(&[1, 2, 3, 4, 5], CHECKSUM_REJECTED));
        assert!(engine.verify(&[1, 2, 3], engine.checksum(&[1, 2, 3])));
    }
}
