pub use ethereum_types::H256;
pub use primitive_types::{H384, H768};

pub type Epoch = u64;
pub type Gwei = u64;
pub type Slot = u64;
pub type ValidatorIndex = u64;

pub type PublicKeyBytes = H384;
pub type SignatureBytes = H768;
