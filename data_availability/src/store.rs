use std::collections::BTreeMap;

use anyhow::Result;
use parking_lot::Mutex;
use types::{nonstandard::BlobSidecars, phase0::primitives::Slot};

/// Storage for verified blob sidecars.
///
/// Only called after a batch passes verification.
pub trait AvailabilityStore: Sync {
    fn persist(&self, slot: Slot, blob_sidecars: &BlobSidecars) -> Result<()>;
}

impl<S: AvailabilityStore + ?Sized> AvailabilityStore for &S {
    #[inline]
    fn persist(&self, slot: Slot, blob_sidecars: &BlobSidecars) -> Result<()> {
        (**self).persist(slot, blob_sidecars)
    }
}

/// Keeps blob sidecars in memory, keyed by slot.
///
/// Persisting a batch for a slot that already has one replaces it.
#[derive(Default, Debug)]
pub struct InMemoryAvailabilityStore {
    blob_sidecars: Mutex<BTreeMap<Slot, BlobSidecars>>,
}

impl AvailabilityStore for InMemoryAvailabilityStore {
    fn persist(&self, slot: Slot, blob_sidecars: &BlobSidecars) -> Result<()> {
        self.blob_sidecars.lock().insert(slot, blob_sidecars.clone());
        Ok(())
    }
}

impl InMemoryAvailabilityStore {
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<BlobSidecars> {
        self.blob_sidecars.lock().get(&slot).cloned()
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.blob_sidecars.lock().contains_key(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blob_sidecars.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blob_sidecars.lock().is_empty()
    }

    /// Removes batches for slots before `slot` and returns how many were removed.
    pub fn prune(&self, slot: Slot) -> usize {
        let mut blob_sidecars = self.blob_sidecars.lock();
        let retained = blob_sidecars.split_off(&slot);
        let pruned = blob_sidecars.len();

        *blob_sidecars = retained;

        pruned
    }
}
