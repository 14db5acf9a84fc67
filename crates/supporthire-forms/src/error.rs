//! Error types for forms and submission sinks.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::fields::FormField;

/// Form-specific errors.
///
/// These cover misuse of the controller API. Field validation failures are
/// not errors in this sense; they land in [`FieldErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// No field with this wire name exists on the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A selection field was given a value outside its option set.
    #[error("invalid value for field {field}: {value:?}")]
    InvalidChoice { field: &'static str, value: String },

    /// The field cannot be assigned from a single string.
    #[error("field {0} is not assignable from text")]
    NotTextField(&'static str),

    /// The submission record could not be encoded as a document.
    #[error("failed to encode submission: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors reported by a [`SubmissionSink`](crate::SubmissionSink) write.
///
/// The controllers never inspect the variant; any error maps to the same
/// user-facing retry message.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The backing store could not be reached.
    #[error("sink unavailable: {0}")]
    Unavailable(String),

    /// The backing store refused the document.
    #[error("write rejected: {0}")]
    Rejected(String),

    /// The document could not be encoded for the store.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other failure raised by a sink implementation.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    /// Wraps an arbitrary error raised by a sink implementation.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(err))
    }
}

/// Per-field validation messages.
///
/// A missing entry means the field is valid or has not been validated yet.
/// Each field holds at most one message: the first rule it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FormField> FieldErrors<F> {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for a field, replacing any previous one.
    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clears the message for a field. Returns whether one was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Writes a validation outcome into the map.
    pub fn record(&mut self, field: F, outcome: std::result::Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(message) => {
                self.errors.insert(field, message);
            }
        }
    }

    /// Returns the message for a field.
    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns the message for a field by its wire name.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        F::from_name(name).and_then(|field| self.get(field))
    }

    /// Returns whether the field currently has a message.
    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl<F: FormField> std::fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{}: {message}", field.name())?;
        }
        Ok(())
    }
}
