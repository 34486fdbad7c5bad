use anyhow::Result;
use types::{phase0::primitives::Epoch, preset::Preset, traits::BeaconState};

use crate::{error::Error, misc};

pub fn get_current_epoch<P: Preset>(state: &(impl BeaconState<P> + ?Sized)) -> Result<Epoch> {
    Ok(misc::compute_epoch_at_slot::<P>(state.slot()?))
}

pub fn get_next_epoch<P: Preset>(state: &(impl BeaconState<P> + ?Sized)) -> Result<Epoch> {
    get_current_epoch::<P>(state)?
        .checked_add(1)
        .ok_or_else(|| Error::EpochOverflow.into())
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU64;

    use nonzero_ext::nonzero;
    use types::{
        phase0::beacon_state::BeaconState as InMemoryBeaconState,
        preset::{Minimal, PresetName},
    };

    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
    struct OneSlotPerEpoch;

    impl Preset for OneSlotPerEpoch {
        const NAME: PresetName = PresetName::Minimal;

        const EPOCHS_PER_SLASHINGS_VECTOR: NonZeroU64 = nonzero!(64_u64);
        const SLOTS_PER_EPOCH: NonZeroU64 = nonzero!(1_u64);

        const PROPORTIONAL_SLASHING_MULTIPLIER: u64 = 2;

        const KZG_COMMITMENT_INCLUSION_PROOF_DEPTH: usize = 10;
        const MAX_BLOB_COMMITMENTS_PER_BLOCK: NonZeroU64 = nonzero!(32_u64);
    }

    #[test]
    fn epochs_are_derived_from_state_slot() -> Result<()> {
        let state = InMemoryBeaconState::<Minimal>::new(17);

        assert_eq!(get_current_epoch(&state)?, 2);
        assert_eq!(get_next_epoch(&state)?, 3);

        Ok(())
    }

    #[test]
    fn next_epoch_fails_on_overflow() {
        let state = InMemoryBeaconState::<OneSlotPerEpoch>::new(u64::MAX);

        let error = get_next_epoch(&state).expect_err("epoch after u64::MAX does not exist");

        assert!(matches!(error.downcast_ref(), Some(Error::EpochOverflow)));
    }
}
