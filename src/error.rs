//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `project-index` application. It uses the `thiserror` library to create a
//! single `Error` enum that covers all anticipated failure modes, providing
//! clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! A malformed record or invalid input is fatal to the whole batch: the
//! per-identity ordering depends on seeing every contributing record with a
//! valid priority, so no partial index is ever produced. Errors propagate
//! unrecovered to the top-level invocation, which terminates the process with
//! a non-zero status and a diagnostic identifying the failing record or path.

use thiserror::Error;

/// Main error type for project-index operations
#[derive(Error, Debug)]
pub enum Error {
    /// The top-level input was not a JSON array of project records.
    ///
    /// This covers both unparseable JSON and a well-formed document of the
    /// wrong shape (e.g. an object or a bare string at the top level).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A project record is missing a required field, has a wrong-typed
    /// field, or carries a priority that is not a well-ordered number.
    ///
    /// Includes the zero-based position of the offending record in the
    /// input sequence so the operator can find and fix it.
    #[error("Malformed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    /// An error occurred while serializing an index for output.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
