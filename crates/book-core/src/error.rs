//! Error types for the order book.
//!
//! The book is infallible for normal operations: cancellation of an unknown
//! id is a no-op and matching cannot fail. The one enforced invariant is id
//! uniqueness among active orders, checked at insertion time.

use std::error::Error;
use std::fmt;

/// Errors returned by book operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// An order with this id is already active in the book.
    DuplicateOrderId(u64),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::DuplicateOrderId(id) => {
                write!(f, "an active order with id {id} already exists")
            }
        }
    }
}

impl Error for BookError {}
