use std::sync::Arc;

use crate::deneb::containers::BlobSidecar;

/// Blob sidecars of a single block, ordered by index.
///
/// Positions may be empty when a sidecar was not received.
/// Such batches are rejected by blob verification.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BlobSidecars {
    pub sidecars: Vec<Option<Arc<BlobSidecar>>>,
}

impl BlobSidecars {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidecars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidecars.is_empty()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.sidecars.iter().filter(|sidecar| sidecar.is_none()).count()
    }

    /// Returns `None` if any position is empty.
    pub fn complete(&self) -> Option<Vec<&BlobSidecar>> {
        self.sidecars.iter().map(Option::as_deref).collect()
    }
}

impl FromIterator<Arc<BlobSidecar>> for BlobSidecars {
    fn from_iter<I: IntoIterator<Item = Arc<BlobSidecar>>>(iter: I) -> Self {
        Self {
            sidecars: iter.into_iter().map(Some).collect(),
        }
    }
}

impl From<Vec<Option<Arc<BlobSidecar>>>> for BlobSidecars {
    fn from(sidecars: Vec<Option<Arc<BlobSidecar>>>) -> Self {
        Self { sidecars }
    }
}
