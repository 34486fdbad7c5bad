pub mod config;
pub mod error;
pub mod nonstandard;
pub mod preset;
pub mod traits;

pub mod phase0 {
    pub mod beacon_state;
    pub mod consts;
    pub mod containers;
    pub mod primitives;
}

pub mod deneb {
    pub mod containers;
    pub mod primitives;
}
