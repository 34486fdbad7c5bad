use ethereum_types::H256;
use sha2::{Digest as _, Sha256};

// SSZ packs values into 32 byte chunks. Anything shorter than a chunk is padded with zeros.
const BYTES_PER_CHUNK: usize = 32;

#[inline]
#[must_use]
pub fn hash_256_256(left: H256, right: H256) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    H256::from_slice(&hasher.finalize())
}

/// `hash_tree_root` of a 48 byte vector such as a KZG commitment or a BLS public key.
///
/// The value spans 2 chunks, the second of which is zero-padded.
#[inline]
#[must_use]
pub fn hash_tree_root_384(bytes: &[u8; 48]) -> H256 {
    let mut left = H256::zero();
    let mut right = H256::zero();

    left.as_bytes_mut().copy_from_slice(&bytes[..BYTES_PER_CHUNK]);
    right.as_bytes_mut()[..bytes.len() - BYTES_PER_CHUNK]
        .copy_from_slice(&bytes[BYTES_PER_CHUNK..]);

    hash_256_256(left, right)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const ZERO_HASH_1: H256 = H256(hex!(
        "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
    ));

    #[test]
    fn hash_of_two_zero_chunks_matches_known_zero_hash() {
        assert_eq!(hash_256_256(H256::zero(), H256::zero()), ZERO_HASH_1);
    }

    #[test]
    fn zero_384_bit_value_has_same_root_as_two_zero_chunks() {
        assert_eq!(hash_tree_root_384(&[0; 48]), ZERO_HASH_1);
    }

    #[test]
    fn root_depends_on_trailing_bytes() {
        let mut bytes = [0; 48];
        bytes[47] = 1;

        assert_ne!(hash_tree_root_384(&bytes), ZERO_HASH_1);
    }
}
