use crate::phase0::primitives::{Epoch, Slot};

pub const FAR_FUTURE_EPOCH: Epoch = Epoch::MAX;
pub const GENESIS_SLOT: Slot = 0;
