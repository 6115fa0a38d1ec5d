//! quotectl-core: configuration and shared errors

pub mod config;
pub mod error;

pub use config::{
    DatabaseConfig, DatabaseSection, DisplayConfig, DisplayMode, QuoteConfig, ServerSettings,
};
pub use error::{CoreError, Result};
