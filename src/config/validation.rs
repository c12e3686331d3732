//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check mirror labels and the preferred mirror for usable values
//! - Runs before a config is accepted into the store
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RewriterConfig → Result<(), Vec<ValidationError>>
//! - Negative TLD widths are unrepresentable; no check needed

use thiserror::Error;

use crate::config::schema::{PreferredMirror, RewriterConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("active profile is blank")]
    BlankProfile,

    #[error("mirror label may not be blank")]
    BlankMirror,

    #[error("mirror label {0:?} contains a separator")]
    SeparatorInMirror(String),

    #[error("mirror label {0:?} is listed twice")]
    DuplicateMirror(String),

    #[error("preferred mirror label may not be blank")]
    BlankPreferredMirror,

    #[error("preferred mirror label {0:?} contains a separator")]
    SeparatorInPreferredMirror(String),
}

/// Check a configuration for semantic problems, collecting every error.
pub fn validate_config(config: &RewriterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.profile.is_empty() {
        errors.push(ValidationError::BlankProfile);
    }

    let mut seen: Vec<&str> = Vec::new();
    for mirror in &config.mirrors {
        if mirror.is_empty() {
            errors.push(ValidationError::BlankMirror);
        } else if mirror.contains(['.', ':']) {
            errors.push(ValidationError::SeparatorInMirror(mirror.clone()));
        }
        if seen.contains(&mirror.as_str()) {
            errors.push(ValidationError::DuplicateMirror(mirror.clone()));
        }
        seen.push(mirror);
    }

    if let PreferredMirror::Label(label) = &config.preferred_mirror {
        if label.is_empty() {
            errors.push(ValidationError::BlankPreferredMirror);
        } else if label.contains(['.', ':']) {
            errors.push(ValidationError::SeparatorInPreferredMirror(label.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
