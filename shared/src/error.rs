//! Error types for talking to the transactions backend.
//!
//! Every failure is caught by the controller method that started the action,
//! logged, and shown to the user once. Nothing here is retried.

use std::fmt;
use thiserror::Error;

/// The user-facing action a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Fetch => write!(f, "fetch"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Stable codes for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NetworkError,
    HttpError,
    InvalidFormat,
    InvalidInput,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NetworkError => write!(f, "NETWORK_ERROR"),
            ErrorCode::HttpError => write!(f, "HTTP_ERROR"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error during {operation}: {message}")]
    Network { operation: Operation, message: String },

    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {status} ({operation} failed)")]
    Http {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// A list response without a usable `content` array, or an undecodable body
    #[error("{message}")]
    InvalidFormat { message: String },

    /// Form input that cannot be turned into a transaction
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl ClientError {
    pub fn network(operation: Operation, message: impl Into<String>) -> Self {
        ClientError::Network {
            operation,
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        ClientError::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ClientError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Network { .. } => ErrorCode::NetworkError,
            ClientError::Http { .. } => ErrorCode::HttpError,
            ClientError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ClientError::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
