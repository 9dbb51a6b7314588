//! book-core
//!
//! Pure order book logic for a single instrument:
//! - order representation (id, type, side, price, remaining quantity)
//! - the book store (arrival-ordered active orders)
//! - type-priority matching and cancellation
//! - typed events for trades and cancels

pub mod error;
pub mod events;
pub mod order;
pub mod order_book;
pub mod order_type;
pub mod side;

pub use error::BookError;
pub use events::{BookEvent, Canceled, Trade};
pub use order::Order;
pub use order_book::OrderBook;
pub use order_type::OrderType;
pub use side::Side;
