pub mod balances;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod indexer;
pub mod proof;
pub mod rpc;
pub mod transaction;
pub mod transition;

pub use error::TransitionError;
pub use tiny_spl_sdk;
