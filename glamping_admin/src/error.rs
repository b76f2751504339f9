//! Error types for the library layer.

use thiserror::Error;

use crate::line_items::LineItemError;
use crate::validation::FormErrors;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding form, line-item and configuration failures.
#[derive(Error, Debug)]
pub enum AdminError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] glamping_api::Error),
    /// A form failed client-side validation. Never reaches the network.
    #[error("Invalid form: {0}")]
    Form(FormErrors),
    /// A line item could not be added.
    #[error("Invalid line item: {0}")]
    LineItem(#[from] LineItemError),
    /// A configuration value was present but malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// User-provided input failed validation outside of a form.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A local file, e.g. an image to upload, could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FormErrors> for AdminError {
    fn from(errors: FormErrors) -> Self {
        Self::Form(errors)
    }
}
