//! Catalogue configuration
/// Settings bound to their configuration root
mod manager;
/// Configuration types and settings
mod types;

pub use manager::{
    CONFIG_FILE_NAME,
    ConfigManager,
};
pub use types::{
    CatalogueSettings,
    ConfigError,
    ValidationError,
};
