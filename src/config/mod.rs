//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ReadyConfig
//!     → CLI overrides applied by the binary, then validated again
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the file itself is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, ReadyConfig};
pub use validation::{validate_config, ValidationError};
