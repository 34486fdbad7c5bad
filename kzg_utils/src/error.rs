#![expect(clippy::module_name_repetitions)]

use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum KzgError {
    #[error("kzg error: {0}")]
    KzgError(String),
    #[error(
        "batch lengths do not match \
         (blobs: {blobs}, commitments: {commitments}, proofs: {proofs})"
    )]
    LengthMismatch {
        blobs: usize,
        commitments: usize,
        proofs: usize,
    },
}
