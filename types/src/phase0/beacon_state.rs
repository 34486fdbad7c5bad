use core::marker::PhantomData;
use std::collections::HashMap;

use anyhow::Result;

use crate::{
    error::Error,
    phase0::{
        consts::GENESIS_SLOT,
        containers::Validator,
        primitives::{Epoch, Gwei, PublicKeyBytes, Slot, ValidatorIndex},
    },
    preset::Preset,
    traits::BeaconState as _,
};

/// Beacon state held entirely in memory.
///
/// Only the fields needed by epoch processing are present.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BeaconState<P: Preset> {
    slot: Slot,
    validators: Vec<Validator>,
    balances: Vec<Gwei>,
    slashings: Vec<Gwei>,
    pubkey_to_index: HashMap<PublicKeyBytes, ValidatorIndex>,
    phantom: PhantomData<P>,
}

impl<P: Preset> Default for BeaconState<P> {
    fn default() -> Self {
        Self::new(GENESIS_SLOT)
    }
}

impl<P: Preset> BeaconState<P> {
    #[must_use]
    pub fn new(slot: Slot) -> Self {
        let slashings_length = P::EPOCHS_PER_SLASHINGS_VECTOR
            .get()
            .try_into()
            .expect("EPOCHS_PER_SLASHINGS_VECTOR should fit in usize");

        Self {
            slot,
            validators: vec![],
            balances: vec![],
            slashings: vec![0; slashings_length],
            pubkey_to_index: HashMap::new(),
            phantom: PhantomData,
        }
    }

    /// Appends a validator to the registry and returns its index.
    ///
    /// Public keys are expected to be unique. A duplicate key shadows the earlier validator in
    /// lookups by public key.
    pub fn push_validator(&mut self, validator: Validator, balance: Gwei) -> ValidatorIndex {
        let validator_index = self.validators.len() as ValidatorIndex;

        self.pubkey_to_index.insert(validator.pubkey, validator_index);
        self.validators.push(validator);
        self.balances.push(balance);

        validator_index
    }

    pub fn balance(&self, validator_index: ValidatorIndex) -> Result<Gwei> {
        let position = self.position(validator_index)?;
        Ok(self.balances[position])
    }

    #[must_use]
    pub fn balances(&self) -> &[Gwei] {
        &self.balances
    }

    #[must_use]
    pub fn slashings(&self) -> &[Gwei] {
        &self.slashings
    }

    #[must_use]
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    fn position(&self, validator_index: ValidatorIndex) -> Result<usize> {
        usize::try_from(validator_index)
            .ok()
            .filter(|position| *position < self.validators.len())
            .ok_or_else(|| {
                Error::ValidatorIndexOutOfBounds {
                    validator_index,
                    validator_count: self.validators.len(),
                }
                .into()
            })
    }
}

impl<P: Preset> crate::traits::BeaconState<P> for BeaconState<P> {
    fn slot(&self) -> Result<Slot> {
        Ok(self.slot)
    }

    fn set_slot(&mut self, slot: Slot) -> Result<()> {
        self.slot = slot;
        Ok(())
    }

    fn validators(&self) -> Result<Vec<Validator>> {
        Ok(self.validators.clone())
    }

    // > Return the combined effective balance of the active validators.
    // > Note: ``get_total_balance`` returns ``EFFECTIVE_BALANCE_INCREMENT`` Gwei minimum
    // > to avoid divisions by zero.
    fn total_active_balance(&self, epoch: Epoch) -> Result<Gwei> {
        let total = self
            .validators
            .iter()
            .filter(|validator| {
                validator.activation_epoch <= epoch && epoch < validator.exit_epoch
            })
            .map(|validator| validator.effective_balance)
            .sum::<Gwei>();

        Ok(total.max(P::EFFECTIVE_BALANCE_INCREMENT.get()))
    }

    fn total_slashings(&self) -> Result<Gwei> {
        Ok(self.slashings.iter().sum())
    }

    fn update_slashing_at_index(&mut self, index: u64, value: Gwei) -> Result<()> {
        let length = self.slashings.len();

        let slot = usize::try_from(index)
            .ok()
            .and_then(|position| self.slashings.get_mut(position))
            .ok_or(Error::SlashingsIndexOutOfBounds {
                index,
                length: length as u64,
            })?;

        *slot = value;

        Ok(())
    }

    fn decrease_balance(&mut self, validator_index: ValidatorIndex, delta: Gwei) -> Result<()> {
        let position = self.position(validator_index)?;
        let balance = &mut self.balances[position];

        *balance = balance.saturating_sub(delta);

        Ok(())
    }

    fn validator_index_by_pubkey(&self, pubkey: PublicKeyBytes) -> Result<ValidatorIndex> {
        self.pubkey_to_index
            .get(&pubkey)
            .copied()
            .ok_or_else(|| Error::PubkeyNotFound { pubkey }.into())
    }
}
