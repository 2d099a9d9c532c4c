

pub mod config;
pub mod error;

pub use config::PurgeConfig;
pub use error::{PurgeError, Result};
