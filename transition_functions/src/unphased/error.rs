use thiserror::Error;
use types::phase0::primitives::{Epoch, Gwei, Slot};

#[derive(Debug, Error)]
pub enum Error {
    #[error("epoch {epoch} is too far in the future to compute slashable epoch")]
    EpochOverflow { epoch: Epoch },
    #[error("total active balance is zero")]
    NoActiveBalance,
    #[error(
        "slashing penalty overflowed \
         (effective_balance: {effective_balance}, \
          adjusted_total_slashing_balance: {adjusted_total_slashing_balance}, \
          total_active_balance: {total_active_balance})"
    )]
    PenaltyOverflow {
        effective_balance: Gwei,
        adjusted_total_slashing_balance: Gwei,
        total_active_balance: Gwei,
    },
    #[error("target slot ({target}) is not later than current slot ({current})")]
    SlotNotLater { current: Slot, target: Slot },
}
