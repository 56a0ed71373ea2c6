//! Error types for the PREXCOL client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, HTTP status, credential storage, and input
//! validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for PREXCOL client operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// HTTP error statuses passed through for the caller to interpret.
    #[error("http error: {0}")]
    Http(#[from] HttpError),

    /// Credential store errors (persistence faults).
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors (invalid URL, role, order status).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials provided at login.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Session has expired and could not be recovered by a refresh.
    ///
    /// The credential store has already been cleared and the session sink
    /// notified by the time this error reaches the caller.
    #[error("session expired")]
    SessionExpired,

    /// The login or refresh endpoint returned a body without a usable
    /// access token.
    #[error("malformed token response: {reason}")]
    MalformedTokenResponse { reason: String },
}

/// A non-401 HTTP error status with the backend's error body, if any.
#[derive(Debug)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (the backend's `error` key, if present).
    pub code: Option<String>,
    /// Human-readable message (the backend's `detail` or `message` key).
    pub message: Option<String>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, code: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Check if this is an authentication rejection.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }
}

/// Credential store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O failed: {message}")]
    Io { message: String },

    /// The stored credentials could not be decoded.
    #[error("stored credentials are corrupt: {message}")]
    Corrupt { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Unknown role value.
    #[error("invalid role '{value}'")]
    Role { value: String },

    /// Unknown order status value.
    #[error("invalid order status '{value}'")]
    OrderStatus { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
