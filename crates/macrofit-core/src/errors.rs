// ABOUTME: Unified error type, error codes, and user-facing error responses
// ABOUTME: Every fallible MacroFit operation returns AppResult<T>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Errors
//!
//! One `AppError` type is shared by the calculation engine, the LLM boundary,
//! and the CLI. It carries a stable code, the message shown to the user, the
//! field it concerns when there is one, and the underlying cause. The message
//! stands alone; the cause chain is only for logs.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Stable error codes, grouped by numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    // Inputs and calculations (3000-3999)
    /// Text that should contain JSON does not
    InvalidFormat = 3002,
    /// A profile value is outside what the equations accept
    ValueOutOfRange = 3003,
    /// Division by zero in the goal arithmetic
    CalculationUndefined = 3004,

    // Meal-plan model (5000-5999)
    /// The model server answered with an error
    ExternalServiceError = 5000,
    /// The model server is down, overloaded, or rate limiting
    ExternalServiceUnavailable = 5001,
    /// The API key was rejected
    ExternalAuthFailed = 5002,

    // Configuration (6000-6999)
    /// A setting needed for this command is not set
    ConfigMissing = 6001,
    /// A setting or tuning table is out of range
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Bug or environment failure
    InternalError = 9000,
    /// JSON encoding or decoding failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Whether the same request may succeed if simply sent again
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::ExternalServiceUnavailable | Self::InvalidFormat)
    }

    /// Short category prefix used in `Display`
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::CalculationUndefined => "The calculation has no defined result",
            Self::ExternalServiceError => "The meal-plan service returned an error",
            Self::ExternalServiceUnavailable => "The meal-plan service is unavailable",
            Self::ExternalAuthFailed => "The meal-plan service rejected the credentials",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "JSON could not be read or written",
        }
    }
}

/// Where an error points and any structured extras
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the field or resource the error concerns
    pub resource: Option<String>,
    /// Free-form JSON extras, an empty object by default
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Error returned by every fallible MacroFit operation
#[derive(Debug, Error)]
pub struct AppError {
    /// Stable code for programmatic handling
    pub code: ErrorCode,
    /// Plain sentence for the user
    pub message: String,
    /// Field and extras
    pub context: ErrorContext,
    /// Underlying cause, logged but not shown
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Error with a code and message and no context
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Name the field or resource this error concerns
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.context.resource = Some(resource.into());
        self
    }

    /// Attach structured extras
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Keep the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Plain message suitable for showing to an end user
    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// `Result` with `AppError`
pub type AppResult<T> = Result<T, AppError>;

/// JSON body printed by the CLI when `--json` is set and a command fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
    /// Field or resource the error concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "is_empty_details")]
    pub details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
                resource: error.context.resource.clone(),
                details: error.context.details.clone(),
            },
        }
    }
}

impl AppError {
    /// Data could not be parsed
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside its acceptable range
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_resource(field)
    }

    /// Calculation without a defined result
    pub fn calculation_undefined(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CalculationUndefined, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Required configuration is absent
    pub fn config_missing(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{key} is not configured"),
        )
        .with_resource(key)
    }

    /// Model server failure prefixed with the service name
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
