use anyhow::Result;

use crate::{
    phase0::{
        containers::Validator,
        primitives::{Epoch, Gwei, PublicKeyBytes, Slot, ValidatorIndex},
    },
    preset::Preset,
};

/// Access to the parts of a beacon state needed by epoch processing.
///
/// Every operation may fail. Implementations backed by storage should report unavailable data
/// as errors rather than panicking. Callers serialize access; implementations need no locking.
pub trait BeaconState<P: Preset> {
    fn slot(&self) -> Result<Slot>;

    fn set_slot(&mut self, slot: Slot) -> Result<()>;

    /// A snapshot of the whole validator registry in index order.
    fn validators(&self) -> Result<Vec<Validator>>;

    /// Sum of effective balances of validators active in `epoch`.
    fn total_active_balance(&self, epoch: Epoch) -> Result<Gwei>;

    /// Sum of all entries in the slashings vector.
    fn total_slashings(&self) -> Result<Gwei>;

    fn update_slashing_at_index(&mut self, index: u64, value: Gwei) -> Result<()>;

    /// Decreases the balance of a validator, saturating at zero.
    fn decrease_balance(&mut self, validator_index: ValidatorIndex, delta: Gwei) -> Result<()>;

    fn validator_index_by_pubkey(&self, pubkey: PublicKeyBytes) -> Result<ValidatorIndex>;
}

impl<P: Preset, S: BeaconState<P> + ?Sized> BeaconState<P> for &mut S {
    #[inline]
    fn slot(&self) -> Result<Slot> {
        (**self).slot()
    }

    #[inline]
    fn set_slot(&mut self, slot: Slot) -> Result<()> {
        (**self).set_slot(slot)
    }

    #[inline]
    fn validators(&self) -> Result<Vec<Validator>> {
        (**self).validators()
    }

    #[inline]
    fn total_active_balance(&self, epoch: Epoch) -> Result<Gwei> {
        (**self).total_active_balance(epoch)
    }

    #[inline]
    fn total_slashings(&self) -> Result<Gwei> {
        (**self).total_slashings()
    }

    #[inline]
    fn update_slashing_at_index(&mut self, index: u64, value: Gwei) -> Result<()> {
        (**self).update_slashing_at_index(index, value)
    }

    #[inline]
    fn decrease_balance(&mut self, validator_index: ValidatorIndex, delta: Gwei) -> Result<()> {
        (**self).decrease_balance(validator_index, delta)
    }

    #[inline]
    fn validator_index_by_pubkey(&self, pubkey: PublicKeyBytes) -> Result<ValidatorIndex> {
        (**self).validator_index_by_pubkey(pubkey)
    }
}
