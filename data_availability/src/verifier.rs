use core::marker::PhantomData;

use anyhow::Result;
use helper_functions::predicates;
use kzg_utils::{eip_4844, KzgVerifier};
use types::{deneb::containers::BlobSidecar, preset::Preset};

/// Cryptographic checks performed on blob sidecars.
///
/// `Ok(false)` means the proof does not match.
/// `Err` means the check could not be performed.
pub trait BlobVerifier: Sync {
    fn verify_inclusion_proof(&self, blob_sidecar: &BlobSidecar) -> Result<bool>;

    fn verify_aggregate_proof(&self, blob_sidecars: &[&BlobSidecar]) -> Result<bool>;
}

impl<V: BlobVerifier + ?Sized> BlobVerifier for &V {
    #[inline]
    fn verify_inclusion_proof(&self, blob_sidecar: &BlobSidecar) -> Result<bool> {
        (**self).verify_inclusion_proof(blob_sidecar)
    }

    #[inline]
    fn verify_aggregate_proof(&self, blob_sidecars: &[&BlobSidecar]) -> Result<bool> {
        (**self).verify_aggregate_proof(blob_sidecars)
    }
}

/// Checks Merkle inclusion proofs against the block body root and
/// delegates KZG batch verification to `K`.
#[derive(Default, Debug)]
pub struct StandardBlobVerifier<P: Preset, K> {
    kzg_verifier: K,
    phantom: PhantomData<P>,
}

impl<P: Preset, K: KzgVerifier> StandardBlobVerifier<P, K> {
    #[must_use]
    pub const fn new(kzg_verifier: K) -> Self {
        Self {
            kzg_verifier,
            phantom: PhantomData,
        }
    }
}

impl<P: Preset, K: KzgVerifier> BlobVerifier for StandardBlobVerifier<P, K> {
    fn verify_inclusion_proof(&self, blob_sidecar: &BlobSidecar) -> Result<bool> {
        Ok(predicates::is_valid_blob_sidecar_inclusion_proof::<P>(
            blob_sidecar,
        ))
    }

    fn verify_aggregate_proof(&self, blob_sidecars: &[&BlobSidecar]) -> Result<bool> {
        eip_4844::verify_blob_kzg_proof_batch(
            blob_sidecars.iter().map(|blob_sidecar| &blob_sidecar.blob),
            blob_sidecars.iter().map(|blob_sidecar| blob_sidecar.kzg_commitment),
            blob_sidecars.iter().map(|blob_sidecar| blob_sidecar.kzg_proof),
            &self.kzg_verifier,
        )
    }
}


#[cfg(test)]
mod tests {
    use kzg_utils::{KzgError, NullKzgVerifier, BYTES_PER_COMMITMENT, BYTES_PER_PROOF};
    use types::preset::{Mainnet, Minimal};

    use super::{test_utils::valid_blob_sidecars, *};

    struct RejectingKzgVerifier;

    impl KzgVerifier for RejectingKzgVerifier {
        fn verify_blob_kzg_proof_batch_raw(
            &self,
            _blobs: &[&[u8]],
            _commitments: &[[u8; BYTES_PER_COMMITMENT]],
            _proofs: &[[u8; BYTES_PER_PROOF]],
        ) -> Result<bool, KzgError> {
            Ok(false)
        }
    }

    #[test]
    fn generated_inclusion_proofs_are_valid() -> Result<()> {
        let verifier = StandardBlobVerifier::<Minimal, _>::new(NullKzgVerifier);

        let blob_sidecars = valid_blob_sidecars::<Minimal>(5, 4);

        for blob_sidecar in blob_sidecars.complete().expect("batch is complete") {
            assert!(verifier.verify_inclusion_proof(blob_sidecar)?);
        }

        let verifier = StandardBlobVerifier::<Mainnet, _>::new(NullKzgVerifier);

        let blob_sidecars = valid_blob_sidecars::<Mainnet>(5, 6);

        for blob_sidecar in blob_sidecars.complete().expect("batch is complete") {
            assert!(verifier.verify_inclusion_proof(blob_sidecar)?);
        }

        Ok(())
    }

    #[test]
    fn inclusion_proof_for_other_preset_is_rejected() -> Result<()> {
        let verifier = StandardBlobVerifier::<Mainnet, _>::new(NullKzgVerifier);
        let blob_sidecars = valid_blob_sidecars::<Minimal>(5, 1);
        let blob_sidecar = blob_sidecars.complete().expect("batch is complete")[0];

        assert!(!verifier.verify_inclusion_proof(blob_sidecar)?);

        Ok(())
    }

    #[test]
    fn aggregate_proof_is_delegated_to_kzg_backend() -> Result<()> {
        let blob_sidecars = valid_blob_sidecars::<Minimal>(5, 3);
        let blob_sidecars = blob_sidecars.complete().expect("batch is complete");

        let accepting = StandardBlobVerifier::<Minimal, _>::new(NullKzgVerifier);
        let rejecting = StandardBlobVerifier::<Minimal, _>::new(RejectingKzgVerifier);

        assert!(accepting.verify_aggregate_proof(&blob_sidecars)?);
        assert!(!rejecting.verify_aggregate_proof(&blob_sidecars)?);

        Ok(())
    }
}
