use bit_field::BitField as _;
use types::{
    deneb::{containers::BlobSidecar, primitives::BlobIndex},
    phase0::primitives::H256,
    preset::Preset,
};

/// [`is_valid_merkle_branch`](https://github.com/ethereum/consensus-specs/blob/v1.4.0-beta.5/specs/phase0/beacon-chain.md#is_valid_merkle_branch)
///
/// `depth` is implied by the length of `branch`.
#[must_use]
pub fn is_valid_merkle_branch(
    leaf: H256,
    branch: impl IntoIterator<Item = H256>,
    index: u64,
    root: H256,
) -> bool {
    let mut hash = leaf;

    for (height, node) in branch.into_iter().enumerate() {
        if height >= 64 {
            return false;
        }

        if index.get_bit(height) {
            hash = hashing::hash_256_256(node, hash);
        } else {
            hash = hashing::hash_256_256(hash, node);
        }
    }

    hash == root
}

/// [`verify_blob_sidecar_inclusion_proof`](https://github.com/ethereum/consensus-specs/blob/v1.4.0-beta.5/specs/deneb/p2p-interface.md#verify_blob_sidecar_inclusion_proof)
///
/// Renamed to match [`is_valid_merkle_branch`].
#[must_use]
pub fn is_valid_blob_sidecar_inclusion_proof<P: Preset>(blob_sidecar: &BlobSidecar) -> bool {
    if blob_sidecar.kzg_commitment_inclusion_proof.len() != P::KZG_COMMITMENT_INCLUSION_PROOF_DEPTH
    {
        return false;
    }

    if blob_sidecar.index >= P::MAX_BLOB_COMMITMENTS_PER_BLOCK.get() {
        return false;
    }

    // `consensus-specs` calls this `gindex`, but that is another misleading name.
    // This is NOT a generalized index.
    let index_at_commitment_depth = index_at_commitment_depth::<P>(blob_sidecar.index);

    is_valid_merkle_branch(
        hashing::hash_tree_root_384(blob_sidecar.kzg_commitment.as_fixed_bytes()),
        blob_sidecar.kzg_commitment_inclusion_proof.iter().copied(),
        index_at_commitment_depth,
        blob_sidecar.signed_block_header.message.body_root,
    )
}

const fn index_at_commitment_depth<P: Preset>(commitment_index: BlobIndex) -> u64 {
    // The Merkle tree that makes up Deneb `BeaconBlockBody` has 12 fields padded to 16 leaves.
    // `blob_kzg_commitments` is the 12th field. Its root mixes in the length of the list,
    // so the subtree containing the commitments is the left child of the field root.
    //
    // `is_valid_merkle_branch` requires the position of the leaf among all nodes at its depth.
    // With the minimal preset (32 commitments) commitment 0 is at position 11 * 2 * 32 = 704.
    let fields_before_blob_kzg_commitments = 11;
    let indices_per_field_without_length = P::MAX_BLOB_COMMITMENTS_PER_BLOCK.get();
    let indices_per_field_with_length = 2 * indices_per_field_without_length;

    fields_before_blob_kzg_commitments * indices_per_field_with_length + commitment_index
}
