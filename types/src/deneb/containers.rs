use serde::{Deserialize, Serialize};

use crate::{
    deneb::primitives::{Blob, BlobIndex, KzgCommitment, KzgProof},
    phase0::{
        containers::SignedBeaconBlockHeader,
        primitives::{Slot, H256},
    },
};

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BlobSidecar {
    pub index: BlobIndex,
    pub blob: Blob,
    pub kzg_commitment: KzgCommitment,
    pub kzg_proof: KzgProof,
    pub signed_block_header: SignedBeaconBlockHeader,
    pub kzg_commitment_inclusion_proof: Vec<H256>,
}

impl BlobSidecar {
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.signed_block_header.message.slot
    }
}
