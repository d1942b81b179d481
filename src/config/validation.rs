//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check entity names are unique (they key the counter store)
//! - Validate value ranges (non-zero periods, non-empty status sets)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before any monitoring starts; failures are fatal

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no entities configured, nothing to monitor")]
    NoEntities,

    #[error("no notifiers configured")]
    NoNotifiers,

    #[error("entity '{0}' has an empty name")]
    EmptyName(String),

    #[error("duplicate entity name '{0}'")]
    DuplicateName(String),

    #[error("entity '{0}' has an empty health-url")]
    EmptyUrl(String),

    #[error("entity '{0}' has a zero check-period")]
    ZeroCheckPeriod(String),

    #[error("entity '{0}' has no valid-statuses")]
    NoValidStatuses(String),
}

/// Validate the loaded configuration, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.entities.is_empty() {
        errors.push(ValidationError::NoEntities);
    }
    if config.notifiers.is_empty() {
        errors.push(ValidationError::NoNotifiers);
    }

    let mut seen = HashSet::new();
    for entity in &config.entities {
        if entity.name.is_empty() {
            errors.push(ValidationError::EmptyName(entity.health_url.clone()));
        } else if !seen.insert(entity.name.as_str()) {
            errors.push(ValidationError::DuplicateName(entity.name.clone()));
        }
        if entity.health_url.is_empty() {
            errors.push(ValidationError::EmptyUrl(entity.name.clone()));
        }
        if entity.check_period == Duration::ZERO {
            errors.push(ValidationError::ZeroCheckPeriod(entity.name.clone()));
        }
        if entity.valid_statuses.is_empty() {
            errors.push(ValidationError::NoValidStatuses(entity.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
