pub mod config;
pub mod snapshot;

pub use config::*;
pub use snapshot::*;
