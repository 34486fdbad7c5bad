use std::collections::HashMap;

use anyhow::{ensure, Result};
use arithmetic::U64Ext as _;
use helper_functions::accessors::{get_current_epoch, get_next_epoch};
use log::debug;
use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator as _};
use types::{
    phase0::primitives::{Epoch, Gwei, ValidatorIndex},
    preset::Preset,
    traits::BeaconState,
};

use crate::unphased::Error;

pub trait SlashingPenalties: Default {
    fn add(&mut self, validator_index: ValidatorIndex, slashing_penalty: Gwei);
}

impl SlashingPenalties for () {
    fn add(&mut self, _validator_index: ValidatorIndex, _slashing_penalty: Gwei) {}
}

impl SlashingPenalties for HashMap<ValidatorIndex, Gwei> {
    fn add(&mut self, validator_index: ValidatorIndex, slashing_penalty: Gwei) {
        // Validators sharing a public key resolve to the same index.
        *self.entry(validator_index).or_default() += slashing_penalty;
    }
}

pub fn process_epoch<P: Preset>(state: &mut impl BeaconState<P>) -> Result<()> {
    process_slashings::<P, ()>(state)?;
    process_slashings_reset(state)
}

pub fn process_slashings_reset<P: Preset>(state: &mut impl BeaconState<P>) -> Result<()> {
    let next_epoch = get_next_epoch::<P>(state)?;

    // > Reset slashings
    state.update_slashing_at_index(next_epoch.mod_index(P::EPOCHS_PER_SLASHINGS_VECTOR), 0)
}

/// Penalizes slashed validators whose withdrawable epoch is [`slashable_epoch`].
///
/// Both totals are read once before any balance is modified.
/// Penalties are computed in parallel and applied in validator order.
/// A failure while applying them leaves earlier penalties in place.
pub fn process_slashings<P: Preset, S: SlashingPenalties>(
    state: &mut impl BeaconState<P>,
) -> Result<S> {
    let current_epoch = get_current_epoch::<P>(state)?;
    let total_active_balance = state.total_active_balance(current_epoch)?;

    let adjusted_total_slashing_balance =
        adjusted_total_slashing_balance::<P>(state.total_slashings()?, total_active_balance);

    let slashable_epoch = slashable_epoch::<P>(current_epoch)?;

    let penalties = state
        .validators()?
        .par_iter()
        .filter(|validator| validator.slashed && validator.withdrawable_epoch == slashable_epoch)
        .map(|validator| {
            slashing_penalty::<P>(
                validator.effective_balance,
                adjusted_total_slashing_balance,
                total_active_balance,
            )
            .map(|penalty| (validator.pubkey, penalty))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut slashing_penalties = S::default();

    for (pubkey, penalty) in &penalties {
        let validator_index = state.validator_index_by_pubkey(*pubkey)?;

        state.decrease_balance(validator_index, *penalty)?;

        slashing_penalties.add(validator_index, *penalty);
    }

    debug!(
        "processed slashings in epoch {current_epoch} \
         (penalized validators: {}, adjusted total slashing balance: {adjusted_total_slashing_balance})",
        penalties.len(),
    );

    Ok(slashing_penalties)
}

/// `min(total_slashings * PROPORTIONAL_SLASHING_MULTIPLIER, total_active_balance)`
///
/// The product is computed in 128 bits before clamping.
#[must_use]
pub fn adjusted_total_slashing_balance<P: Preset>(
    total_slashings: Gwei,
    total_active_balance: Gwei,
) -> Gwei {
    let product = total_slashings.mul_wide(P::PROPORTIONAL_SLASHING_MULTIPLIER);

    Gwei::try_from(product).map_or(total_active_balance, |product| {
        product.min(total_active_balance)
    })
}

/// The only withdrawable epoch at which slashed validators are penalized in `current_epoch`.
///
/// This is `(current_epoch + EPOCHS_PER_SLASHINGS_VECTOR) / 2`, not
/// `current_epoch + EPOCHS_PER_SLASHINGS_VECTOR / 2`.
pub fn slashable_epoch<P: Preset>(current_epoch: Epoch) -> Result<Epoch> {
    let sum = current_epoch
        .checked_add(P::EPOCHS_PER_SLASHINGS_VECTOR.get())
        .ok_or(Error::EpochOverflow {
            epoch: current_epoch,
        })?;

    Ok(sum / 2)
}

pub fn slashing_penalty<P: Preset>(
    effective_balance: Gwei,
    adjusted_total_slashing_balance: Gwei,
    total_active_balance: Gwei,
) -> Result<Gwei> {
    ensure!(total_active_balance > 0, Error::NoActiveBalance);

    // > Factored out from penalty numerator to avoid uint64 overflow
    let increment = P::EFFECTIVE_BALANCE_INCREMENT.get();
    let penalty_numerator =
        (effective_balance / increment).mul_wide(adjusted_total_slashing_balance);

    let penalty = (penalty_numerator / u128::from(total_active_balance))
        .checked_mul(u128::from(increment))
        .and_then(|penalty| Gwei::try_from(penalty).ok())
        .ok_or(Error::PenaltyOverflow {
            effective_balance,
            adjusted_total_slashing_balance,
            total_active_balance,
        })?;

    Ok(penalty)
}
