pub use error::KzgError;

pub mod eip_4844;

mod error;

pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PROOF: usize = 48;

/// A KZG backend able to check blob proofs in bulk.
///
/// Implementations receive inputs of equal length.
/// A batch that fails verification is reported as `Ok(false)`.
/// Errors are reserved for inputs the backend cannot process at all.
pub trait KzgVerifier: Sync {
    fn verify_blob_kzg_proof_batch_raw(
        &self,
        blobs: &[&[u8]],
        commitments: &[[u8; BYTES_PER_COMMITMENT]],
        proofs: &[[u8; BYTES_PER_PROOF]],
    ) -> Result<bool, KzgError>;
}

impl<V: KzgVerifier + ?Sized> KzgVerifier for &V {
    #[inline]
    fn verify_blob_kzg_proof_batch_raw(
        &self,
        blobs: &[&[u8]],
        commitments: &[[u8; BYTES_PER_COMMITMENT]],
        proofs: &[[u8; BYTES_PER_PROOF]],
    ) -> Result<bool, KzgError> {
        (**self).verify_blob_kzg_proof_batch_raw(blobs, commitments, proofs)
    }
}

/// Accepts every batch.
///
/// Useful where proofs have already been checked or in tests that exercise other logic.
#[derive(Clone, Copy, Default, Debug)]
pub struct NullKzgVerifier;

impl KzgVerifier for NullKzgVerifier {
    #[inline]
    fn verify_blob_kzg_proof_batch_raw(
        &self,
        _blobs: &[&[u8]],
        _commitments: &[[u8; BYTES_PER_COMMITMENT]],
        _proofs: &[[u8; BYTES_PER_PROOF]],
    ) -> Result<bool, KzgError> {
        Ok(true)
    }
}
