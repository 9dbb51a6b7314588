//! Events emitted by the order book.
//!
//! These are transport-agnostic logical events: the book returns them in
//! occurrence order and the `book-report` crate renders them as report
//! lines. The core stays free of formatting concerns.

/// An event produced by a book operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    /// Two orders executed against each other.
    Trade(Trade),

    /// An order was removed by explicit cancellation.
    Canceled(Canceled),
}

/// Execution report.
///
/// `price` is always the resting order's price, and `quantity` is the
/// aggressor's full remaining quantity at execution time (the aggressor is
/// removed after exactly one execution, whether or not the resting order
/// covered it).
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub aggressor_id: u64,
    pub resting_id: u64,
    pub price: f64,
    pub quantity: u32,
}

/// Cancellation report.
#[derive(Debug, Clone, PartialEq)]
pub struct Canceled {
    pub order_id: u64,
}

// -----------------------------------------------------------------------------
// Convenience constructors
// -----------------------------------------------------------------------------

impl BookEvent {
    pub fn trade(aggressor_id: u64, resting_id: u64, price: f64, quantity: u32) -> Self {
        BookEvent::Trade(Trade {
            aggressor_id,
            resting_id,
            price,
            quantity,
        })
    }

    pub fn canceled(order_id: u64) -> Self {
        BookEvent::Canceled(Canceled { order_id })
    }
}
