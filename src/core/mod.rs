/*!
 * Core Module
 * Limits, configuration and crate-level error handling
 */

pub mod config;
pub mod errors;
pub mod limits;

// Re-export for convenience
pub use config::CollectionConfig;
pub use errors::*;
