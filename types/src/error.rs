use thiserror::Error;

use crate::phase0::primitives::{PublicKeyBytes, ValidatorIndex};

#[derive(Debug, Error)]
pub enum Error {
    #[error("no validator has public key {pubkey:?}")]
    PubkeyNotFound { pubkey: PublicKeyBytes },
    #[error("slashings index {index} is out of bounds (length: {length})")]
    SlashingsIndexOutOfBounds { index: u64, length: u64 },
    #[error("validator index {validator_index} is out of bounds (validator count: {validator_count})")]
    ValidatorIndexOutOfBounds {
        validator_index: ValidatorIndex,
        validator_count: usize,
    },
}
