use anyhow::{ensure, Result};
use helper_functions::misc;
use types::{phase0::primitives::Slot, preset::Preset, traits::BeaconState};

use crate::unphased::{epoch_processing, Error};

pub fn process_slots<P: Preset>(state: &mut impl BeaconState<P>, slot: Slot) -> Result<()> {
    let current = state.slot()?;

    ensure!(
        current < slot,
        Error::SlotNotLater {
            current,
            target: slot,
        },
    );

    let mut state_slot = current;

    while state_slot < slot {
        // > Process epoch on the start slot of the next epoch
        if misc::is_epoch_start::<P>(state_slot + 1) {
            epoch_processing::process_epoch(state)?;
        }

        state_slot += 1;
        state.set_slot(state_slot)?;
    }

    Ok(())
}
