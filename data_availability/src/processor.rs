use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use log::{debug, warn};
use rayon::iter::{
    IndexedParallelIterator as _, IntoParallelRefIterator as _, ParallelIterator as _,
};
use types::{
    config::Config, deneb::containers::BlobSidecar, nonstandard::BlobSidecars,
    phase0::primitives::Slot,
};

use crate::{error::Error, store::AvailabilityStore, verifier::BlobVerifier};

pub struct BlobProcessor<V, S> {
    config: Arc<Config>,
    verifier: V,
    store: S,
    is_exiting: Arc<AtomicBool>,
}

impl<V: BlobVerifier, S: AvailabilityStore> BlobProcessor<V, S> {
    #[must_use]
    pub fn new(config: Arc<Config>, verifier: V, store: S) -> Self {
        Self {
            config,
            verifier,
            store,
            is_exiting: Arc::default(),
        }
    }

    /// Shares an exit flag with the rest of the application.
    #[must_use]
    pub fn with_exit_flag(mut self, is_exiting: Arc<AtomicBool>) -> Self {
        self.is_exiting = is_exiting;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Makes in-flight and future calls to [`Self::process_blobs`] fail without persisting.
    pub fn cancel(&self) {
        self.is_exiting.store(true, Ordering::Relaxed);
    }

    /// Verifies `blob_sidecars` and persists them under `slot` if they are valid.
    ///
    /// Inclusion proofs and the aggregate proof are checked in parallel.
    /// Both checks run to completion even if one of them fails.
    pub fn process_blobs(&self, slot: Slot, blob_sidecars: &BlobSidecars) -> Result<()> {
        if self.is_exiting() {
            bail!(Error::Cancelled);
        }

        let maximum = self.config.max_blobs_per_block;
        let in_batch = blob_sidecars.len();

        if !u64::try_from(in_batch).is_ok_and(|in_batch| in_batch <= maximum) {
            let error = Error::TooManySidecars { maximum, in_batch };
            warn!("{error} for slot {slot}");
            bail!(error);
        }

        let verify_inclusion_proofs = || self.verify_inclusion_proofs(slot, blob_sidecars);
        let verify_aggregate_proof = || self.verify_aggregate_proof(blob_sidecars);

        let (mut failures, aggregate_failure) =
            rayon::join(verify_inclusion_proofs, verify_aggregate_proof);

        if self.is_exiting() {
            bail!(Error::Cancelled);
        }

        failures.extend(aggregate_failure);

        if !failures.is_empty() {
            let error = Error::VerificationFailed { slot, failures };
            warn!("{error}");
            bail!(error);
        }

        self.store
            .persist(slot, blob_sidecars)
            .context(Error::PersistenceFailed { slot })
            .inspect_err(|error| warn!("{error:#}"))?;

        debug!("persisted {in_batch} blob sidecars for slot {slot}");

        Ok(())
    }

    fn is_exiting(&self) -> bool {
        self.is_exiting.load(Ordering::Relaxed)
    }

    fn verify_inclusion_proofs(&self, slot: Slot, blob_sidecars: &BlobSidecars) -> Vec<Error> {
        blob_sidecars
            .sidecars
            .par_iter()
            .enumerate()
            .filter_map(|(position, blob_sidecar)| {
                if self.is_exiting() {
                    return Some(Error::Cancelled);
                }

                let Some(blob_sidecar) = blob_sidecar else {
                    return Some(Error::MissingSidecar { position });
                };

                self.verify_inclusion_proof(slot, position, blob_sidecar)
                    .err()
            })
            .collect()
    }

    fn verify_inclusion_proof(
        &self,
        slot: Slot,
        position: usize,
        blob_sidecar: &BlobSidecar,
    ) -> Result<(), Error> {
        let index = blob_sidecar.index;

        if usize::try_from(index).ok() != Some(position) {
            return Err(Error::IndexMismatch { position, index });
        }

        if blob_sidecar.slot() != slot {
            return Err(Error::SlotMismatch {
                index,
                expected: slot,
                in_sidecar: blob_sidecar.slot(),
            });
        }

        match self.verifier.verify_inclusion_proof(blob_sidecar) {
            Ok(true) => Ok(()),
            Ok(false) => Err(Error::InvalidInclusionProof { index }),
            Err(error) => Err(Error::InclusionProofFailed {
                index,
                reason: format!("{error:#}"),
            }),
        }
    }

    fn verify_aggregate_proof(&self, blob_sidecars: &BlobSidecars) -> Option<Error> {
        if self.is_exiting() {
            return Some(Error::Cancelled);
        }

        let Some(complete) = blob_sidecars.complete() else {
            return Some(Error::IncompleteBatch {
                missing: blob_sidecars.missing_count(),
                total: blob_sidecars.len(),
            });
        };

        match self.verifier.verify_aggregate_proof(&complete) {
            Ok(true) => None,
            Ok(false) => Some(Error::InvalidAggregateProof {
                count: complete.len(),
            }),
            Err(error) => Some(Error::AggregateProofFailed {
                reason: format!("{error:#}"),
            }),
        }
    }
}
