//! Configuration validation.
//!
//! # Responsibilities
//! - Validate value ranges (timeout and poll interval > 0)
//! - Check the poll interval fits inside the timeout
//! - Check every selector parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ReadyConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ReadyConfig;
use crate::selector::{Selector, SelectorError};

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("poll_interval_ms must be greater than zero")]
    ZeroPollInterval,

    #[error("poll_interval_ms ({poll_interval_ms}) must be shorter than the timeout ({timeout_secs}s)")]
    PollIntervalTooLong { poll_interval_ms: u64, timeout_secs: u64 },

    #[error("output_file must not be empty")]
    EmptyOutputFile,

    #[error("selector {index}: {source}")]
    Selector { index: usize, source: SelectorError },
}

pub fn validate_config(config: &ReadyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }
    if config.poll_interval() >= config.timeout() {
        errors.push(ValidationError::PollIntervalTooLong {
            poll_interval_ms: config.poll_interval_ms,
            timeout_secs: config.timeout_secs,
        });
    }
    if config.output_file.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyOutputFile);
    }
    for (index, selector) in config.selectors.iter().enumerate() {
        if let Err(source) = Selector::parse(selector) {
            errors.push(ValidationError::Selector { index, source });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
