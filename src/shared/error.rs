//! Shared Error Types
//!
//! Validation failures are collected rather than reported one at a time, so a
//! client submitting a post with both a short title and a short body learns
//! about both fields in a single response.
//!
//! # Usage
//!
//! ```rust
//! use blog_platform::shared::error::ValidationError;
//!
//! let mut errors = ValidationError::new();
//! errors.push("title", "Title must be between 5 and 100 characters");
//! assert!(errors.into_result().is_err());
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failing field and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field as it appears in the request body
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// One or more fields failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationError {
    /// Failing fields in the order they were checked
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty error collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error for a single field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Record a failing field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the failing fields, deduplicated, in check order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(error.field.as_str());
            }
        }
        fields
    }

    /// `Ok(())` if nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
