use std::sync::Arc;

use primitive_types::H384;

pub type BlobIndex = u64;

// TODO(feature/deneb): `Blob` is not bounded by `FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT`.
//                      Length is only checked by the KZG backend.
pub type Blob = Arc<[u8]>;

pub type KzgCommitment = H384;
pub type KzgProof = H384;
