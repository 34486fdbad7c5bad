use itertools::Itertools as _;
use thiserror::Error;
use types::{deneb::primitives::BlobIndex, phase0::primitives::Slot};

#[derive(Debug, Error)]
pub enum Error {
    #[error("aggregate proof verification failed: {reason}")]
    AggregateProofFailed { reason: String },
    #[error("blob processing was cancelled")]
    Cancelled,
    #[error("inclusion proof verification failed for blob sidecar {index}: {reason}")]
    InclusionProofFailed { index: BlobIndex, reason: String },
    #[error("{missing} of {total} blob sidecars are missing; batch cannot be verified as a whole")]
    IncompleteBatch { missing: usize, total: usize },
    #[error("blob sidecar at position {position} has index {index}")]
    IndexMismatch { position: usize, index: BlobIndex },
    #[error("aggregate proof of {count} blob sidecars is invalid")]
    InvalidAggregateProof { count: usize },
    #[error("blob sidecar {index} has invalid inclusion proof")]
    InvalidInclusionProof { index: BlobIndex },
    #[error("blob sidecar at position {position} is missing")]
    MissingSidecar { position: usize },
    #[error("failed to persist blob sidecars for slot {slot}")]
    PersistenceFailed { slot: Slot },
    #[error("blob sidecar {index} is for slot {in_sidecar} instead of {expected}")]
    SlotMismatch {
        index: BlobIndex,
        expected: Slot,
        in_sidecar: Slot,
    },
    #[error("too many blob sidecars (maximum: {maximum}, in_batch: {in_batch})")]
    TooManySidecars { maximum: u64, in_batch: usize },
    #[error(
        "verification of blob sidecars for slot {slot} failed: {}",
        .failures.iter().format("; ")
    )]
    VerificationFailed { slot: Slot, failures: Vec<Self> },
}

impl Error {
    /// Whether the failure is caused by the shape of the batch rather than by a proof mismatch.
    ///
    /// [`Error::VerificationFailed`] is malformed if any of its failures is.
    #[must_use]
    pub fn is_malformed_batch(&self) -> bool {
        match self {
            Self::IncompleteBatch { .. }
            | Self::IndexMismatch { .. }
            | Self::MissingSidecar { .. }
            | Self::SlotMismatch { .. }
            | Self::TooManySidecars { .. } => true,
            Self::VerificationFailed { failures, .. } => {
                failures.iter().any(Self::is_malformed_batch)
            }
            Self::AggregateProofFailed { .. }
            | Self::Cancelled
            | Self::InclusionProofFailed { .. }
            | Self::InvalidAggregateProof { .. }
            | Self::InvalidInclusionProof { .. }
            | Self::PersistenceFailed { .. } => false,
        }
    }
}
