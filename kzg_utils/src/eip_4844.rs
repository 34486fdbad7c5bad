use anyhow::{ensure, Result};
use types::deneb::primitives::{Blob, KzgCommitment, KzgProof};

use crate::{error::KzgError, KzgVerifier};

pub fn verify_blob_kzg_proof(
    blob: &Blob,
    commitment: KzgCommitment,
    proof: KzgProof,
    verifier: impl KzgVerifier,
) -> Result<bool> {
    verify_blob_kzg_proof_batch([blob], [commitment], [proof], verifier)
}

pub fn verify_blob_kzg_proof_batch<'blob>(
    blobs: impl IntoIterator<Item = &'blob Blob>,
    commitments: impl IntoIterator<Item = KzgCommitment>,
    proofs: impl IntoIterator<Item = KzgProof>,
    verifier: impl KzgVerifier,
) -> Result<bool> {
    let raw_blobs = blobs.into_iter().map(|blob| &blob[..]).collect::<Vec<_>>();

    let raw_commitments = commitments
        .into_iter()
        .map(KzgCommitment::to_fixed_bytes)
        .collect::<Vec<_>>();

    let raw_proofs = proofs
        .into_iter()
        .map(KzgProof::to_fixed_bytes)
        .collect::<Vec<_>>();

    ensure!(
        raw_blobs.len() == raw_commitments.len() && raw_blobs.len() == raw_proofs.len(),
        KzgError::LengthMismatch {
            blobs: raw_blobs.len(),
            commitments: raw_commitments.len(),
            proofs: raw_proofs.len(),
        },
    );

    verifier
        .verify_blob_kzg_proof_batch_raw(&raw_blobs, &raw_commitments, &raw_proofs)
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::{NullKzgVerifier, BYTES_PER_COMMITMENT, BYTES_PER_PROOF};

    use super::*;

    #[derive(Default)]
    struct RecordingVerifier {
        batch_sizes: Mutex<Vec<usize>>,
        result: bool,
    }

    impl KzgVerifier for RecordingVerifier {
        fn verify_blob_kzg_proof_batch_raw(
            &self,
            blobs: &[&[u8]],
            commitments: &[[u8; BYTES_PER_COMMITMENT]],
            proofs: &[[u8; BYTES_PER_PROOF]],
        ) -> Result<bool, KzgError> {
            assert_eq!(blobs.len(), commitments.len());
            assert_eq!(blobs.len(), proofs.len());

            self.batch_sizes.lock().push(blobs.len());

            Ok(self.result)
        }
    }

    struct FailingVerifier;

    impl KzgVerifier for FailingVerifier {
        fn verify_blob_kzg_proof_batch_raw(
            &self,
            _blobs: &[&[u8]],
            _commitments: &[[u8; BYTES_PER_COMMITMENT]],
            _proofs: &[[u8; BYTES_PER_PROOF]],
        ) -> Result<bool, KzgError> {
            Err(KzgError::KzgError("invalid blob length".to_owned()))
        }
    }

    fn blobs(count: usize) -> Vec<Blob> {
        (0..count).map(|_| Arc::from(vec![0; 64])).collect()
    }

    #[test]
    fn batch_is_passed_to_verifier() -> Result<()> {
        let verifier = RecordingVerifier {
            result: true,
            ..RecordingVerifier::default()
        };

        let blobs = blobs(3);
        let commitments = [KzgCommitment::repeat_byte(1); 3];
        let proofs = [KzgProof::repeat_byte(2); 3];

        assert!(verify_blob_kzg_proof_batch(
            &blobs,
            commitments,
            proofs,
            &verifier,
        )?);

        assert_eq!(*verifier.batch_sizes.lock(), [3]);

        Ok(())
    }

    #[test]
    fn failed_batch_is_reported_as_false() -> Result<()> {
        let verifier = RecordingVerifier::default();

        assert!(!verify_blob_kzg_proof(
            &blobs(1)[0],
            KzgCommitment::zero(),
            KzgProof::zero(),
            &verifier,
        )?);

        Ok(())
    }

    #[test]
    fn mismatched_lengths_are_rejected_before_verification() {
        let verifier = RecordingVerifier::default();

        let error = verify_blob_kzg_proof_batch(
            &blobs(2),
            [KzgCommitment::zero()],
            [KzgProof::zero(); 2],
            &verifier,
        )
        .expect_err("there are fewer commitments than blobs");

        assert_eq!(
            error.downcast_ref(),
            Some(&KzgError::LengthMismatch {
                blobs: 2,
                commitments: 1,
                proofs: 2,
            }),
        );
        assert!(verifier.batch_sizes.lock().is_empty());
    }

    #[test]
    fn backend_errors_are_propagated() {
        let error = verify_blob_kzg_proof_batch(
            &blobs(1),
            [KzgCommitment::zero()],
            [KzgProof::zero()],
            FailingVerifier,
        )
        .expect_err("backend fails");

        assert!(matches!(error.downcast_ref(), Some(KzgError::KzgError(_))));
    }

    #[test]
    fn null_verifier_accepts_empty_batch() -> Result<()> {
        let blobs: Vec<Blob> = vec![];
        let commitments: Vec<KzgCommitment> = vec![];
        let proofs: Vec<KzgProof> = vec![];

        assert!(verify_blob_kzg_proof_batch(
            &blobs,
            commitments,
            proofs,
            NullKzgVerifier,
        )?);

        Ok(())
    }
}
