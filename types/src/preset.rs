use core::{fmt::Debug, hash::Hash, num::NonZeroU64};

use nonzero_ext::nonzero;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumString};

/// Compile-time configuration variables.
///
/// See [presets in `consensus-specs`](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets).
///
/// Constants that are used as divisors are `NonZeroU64`.
pub trait Preset: Copy + Eq + Ord + Hash + Default + Debug + Send + Sync + 'static {
    const NAME: PresetName;

    // Phase 0
    const EFFECTIVE_BALANCE_INCREMENT: NonZeroU64 = nonzero!(1_000_000_000_u64);
    const EPOCHS_PER_SLASHINGS_VECTOR: NonZeroU64;
    const SLOTS_PER_EPOCH: NonZeroU64;

    // Raised in Altair and again in Bellatrix. Only the latest value is used.
    const PROPORTIONAL_SLASHING_MULTIPLIER: u64;

    // Deneb
    const KZG_COMMITMENT_INCLUSION_PROOF_DEPTH: usize;
    const MAX_BLOB_COMMITMENTS_PER_BLOCK: NonZeroU64;
}

/// [Mainnet preset](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets/mainnet).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Mainnet;

impl Preset for Mainnet {
    const NAME: PresetName = PresetName::Mainnet;

    const EPOCHS_PER_SLASHINGS_VECTOR: NonZeroU64 = nonzero!(8192_u64);
    const SLOTS_PER_EPOCH: NonZeroU64 = nonzero!(32_u64);

    const PROPORTIONAL_SLASHING_MULTIPLIER: u64 = 3;

    const KZG_COMMITMENT_INCLUSION_PROOF_DEPTH: usize = 17;
    const MAX_BLOB_COMMITMENTS_PER_BLOCK: NonZeroU64 = nonzero!(4096_u64);
}

/// [Minimal preset](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/presets/minimal).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Minimal;

impl Preset for Minimal {
    const NAME: PresetName = PresetName::Minimal;

    const EPOCHS_PER_SLASHINGS_VECTOR: NonZeroU64 = nonzero!(64_u64);
    const SLOTS_PER_EPOCH: NonZeroU64 = nonzero!(8_u64);

    const PROPORTIONAL_SLASHING_MULTIPLIER: u64 = 2;

    const KZG_COMMITMENT_INCLUSION_PROOF_DEPTH: usize = 10;
    const MAX_BLOB_COMMITMENTS_PER_BLOCK: NonZeroU64 = nonzero!(32_u64);
}

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Debug,
    Display,
    EnumString,
    DeserializeFromStr,
    SerializeDisplay,
)]
#[strum(serialize_all = "lowercase")]
pub enum PresetName {
    #[default]
    Mainnet,
    Minimal,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    // The depth covers `BeaconBlockBody` (4 levels), the length mix-in (1 level)
    // and the list of commitments itself.
    fn expected_depth<P: Preset>() -> usize {
        let list_depth = P::MAX_BLOB_COMMITMENTS_PER_BLOCK.ilog2();
        4 + 1 + usize::try_from(list_depth).expect("depth fits in usize")
    }

    #[test]
    fn inclusion_proof_depth_is_consistent_with_commitment_limit() {
        assert_eq!(
            Mainnet::KZG_COMMITMENT_INCLUSION_PROOF_DEPTH,
            expected_depth::<Mainnet>(),
        );
        assert_eq!(
            Minimal::KZG_COMMITMENT_INCLUSION_PROOF_DEPTH,
            expected_depth::<Minimal>(),
        );
    }

    #[test_case(PresetName::Mainnet => "mainnet")]
    #[test_case(PresetName::Minimal => "minimal")]
    fn preset_name_display(name: PresetName) -> String {
        name.to_string()
    }

    #[test]
    fn preset_name_parses_lowercase() {
        assert_eq!("minimal".parse::<PresetName>().ok(), Some(PresetName::Minimal));
        assert!("Gnosis".parse::<PresetName>().is_err());
    }
}
