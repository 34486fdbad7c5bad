use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preset::{Preset, PresetName};

/// Configuration variables customizable at runtime.
///
/// See [configurations in `consensus-specs`](https://github.com/ethereum/consensus-specs/tree/aac851f860fa384916f62027b2dbe3318a354c5b/configs).
///
/// Values not present in a configuration file are taken from [`Config::default`].
#[expect(
    clippy::struct_field_names,
    reason = "struct_field_name is allowed to have config_name, as it starts with the same name as struct"
)]
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    // Meta
    pub config_name: Cow<'static, str>,
    pub preset_base: PresetName,

    // Deneb
    pub max_blobs_per_block: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Meta
            //
            // Use `default` as the default `config_name` and override it in `Config::mainnet`.
            // This way custom network data will be kept separate from mainnet data if a user
            // forgets to specify a custom `CONFIG_NAME`.
            config_name: Cow::Borrowed("default"),
            preset_base: PresetName::Mainnet,

            // Deneb
            max_blobs_per_block: 6,
        }
    }
}

impl Config {
    /// [Mainnet configuration](https://github.com/eth-clients/mainnet/blob/978f1794eada6f85bee76e4d2d5959a5fb8e0cc5/metadata/config.yaml).
    #[must_use]
    pub fn mainnet() -> Self {
        Self {
            config_name: Cow::Borrowed("mainnet"),
            ..Self::default()
        }
    }

    /// [Minimal configuration](https://github.com/ethereum/consensus-specs/blob/aac851f860fa384916f62027b2dbe3318a354c5b/configs/minimal.yaml).
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            config_name: Cow::Borrowed("minimal"),
            preset_base: PresetName::Minimal,
            ..Self::default()
        }
    }

    pub fn validate<P: Preset>(&self) -> Result<(), Error> {
        if self.config_name.is_empty() {
            return Err(Error::NameEmpty);
        }

        // See <https://github.com/ethereum/consensus-specs/blob/aac851f860fa384916f62027b2dbe3318a354c5b/configs/mainnet.yaml#L10>.
        for character in self.config_name.chars() {
            if !matches!(character, 'a'..='z' | '0'..='9' | '-') {
                return Err(Error::NameContainsIllegalCharacters);
            }
        }

        if self.preset_base != P::NAME {
            return Err(Error::PresetMismatch {
                expected: P::NAME,
                actual: self.preset_base,
            });
        }

        if self.max_blobs_per_block > P::MAX_BLOB_COMMITMENTS_PER_BLOCK.get() {
            return Err(Error::TooManyBlobsPerBlock {
                max_blobs_per_block: self.max_blobs_per_block,
                max_blob_commitments_per_block: P::MAX_BLOB_COMMITMENTS_PER_BLOCK.get(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration name is empty")]
    NameEmpty,
    #[error("configuration name contains illegal characters")]
    NameContainsIllegalCharacters,
    #[error("configuration is based on {actual} preset but {expected} preset is in use")]
    PresetMismatch {
        expected: PresetName,
        actual: PresetName,
    },
    #[error(
        "MAX_BLOBS_PER_BLOCK ({max_blobs_per_block}) exceeds \
         MAX_BLOB_COMMITMENTS_PER_BLOCK ({max_blob_commitments_per_block})"
    )]
    TooManyBlobsPerBlock {
        max_blobs_per_block: u64,
        max_blob_commitments_per_block: u64,
    },
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::preset::{Mainnet, Minimal};

    use super::*;

    #[test]
    fn mainnet_config_is_valid() -> Result<(), Error> {
        Config::mainnet().validate::<Mainnet>()
    }

    #[test]
    fn minimal_config_is_valid() -> Result<(), Error> {
        Config::minimal().validate::<Minimal>()
    }

    #[test]
    fn config_for_other_preset_is_rejected() {
        assert!(matches!(
            Config::minimal().validate::<Mainnet>(),
            Err(Error::PresetMismatch {
                expected: PresetName::Mainnet,
                actual: PresetName::Minimal,
            }),
        ));
    }

    #[test_case("" => matches Err(Error::NameEmpty))]
    #[test_case("Mainnet" => matches Err(Error::NameContainsIllegalCharacters))]
    #[test_case("custom-devnet-1" => matches Ok(()))]
    fn config_name_is_validated(config_name: &'static str) -> Result<(), Error> {
        Config {
            config_name: Cow::Borrowed(config_name),
            ..Config::default()
        }
        .validate::<Mainnet>()
    }

    #[test]
    fn blob_limit_above_commitment_limit_is_rejected() {
        let config = Config {
            max_blobs_per_block: 33,
            ..Config::minimal()
        };

        assert!(matches!(
            config.validate::<Minimal>(),
            Err(Error::TooManyBlobsPerBlock { max_blobs_per_block: 33, .. }),
        ));
    }

    #[test]
    fn missing_fields_are_filled_from_default() -> Result<(), serde_yaml::Error> {
        let yaml = "CONFIG_NAME: minimal\nPRESET_BASE: minimal\n";

        let config = serde_yaml::from_str::<Config>(yaml)?;

        assert_eq!(config, Config::minimal());

        Ok(())
    }

    #[test]
    fn config_round_trips_through_yaml() -> Result<(), serde_yaml::Error> {
        let config = Config {
            max_blobs_per_block: 9,
            ..Config::mainnet()
        };

        let yaml = serde_yaml::to_string(&config)?;

        assert!(yaml.contains("MAX_BLOBS_PER_BLOCK: 9"));
        assert_eq!(serde_yaml::from_str::<Config>(&yaml)?, config);

        Ok(())
    }
}
