//! Verification and storage of blob sidecars.
//!
//! A batch of blob sidecars is checked in two independent ways that run in parallel:
//! - every sidecar must prove that its commitment is included in the block body
//! - the blobs, commitments and proofs of the whole batch must pass KZG batch verification
//!
//! The batch is stored only if both checks pass.
//! Failures from both checks are reported together in [`Error::VerificationFailed`].

pub use crate::{
    error::Error,
    processor::BlobProcessor,
    store::{AvailabilityStore, InMemoryAvailabilityStore},
    verifier::{BlobVerifier, StandardBlobVerifier},
};

mod error;
mod processor;
mod store;
mod verifier;
