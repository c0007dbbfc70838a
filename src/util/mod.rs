// logtriage - util/mod.rs
//
// Utility modules: error types, named constants, logging setup,
// epoch conversion. No dependencies on core or app layers.

pub mod constants;
pub mod epoch;
pub mod error;
pub mod logging;
