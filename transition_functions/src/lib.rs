pub mod unphased {
    pub use epoch_processing::{
        adjusted_total_slashing_balance, process_epoch, process_slashings,
        process_slashings_reset, slashable_epoch, slashing_penalty, SlashingPenalties,
    };
    pub use error::Error;
    pub use slot_processing::process_slots;

    mod epoch_processing;
    mod error;
    mod slot_processing;
}
