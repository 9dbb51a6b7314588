//! Order representation used inside the book store.

use crate::order_type::OrderType;
use crate::side::Side;

/// A single order in the book.
///
/// Identity (`id`, `order_type`, `side`, `price`) is fixed at construction;
/// only `quantity` (the remaining unfilled size) mutates, and only while the
/// order is the resting side of an execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub order_type: OrderType,
    pub side: Side,

    /// Limit price. Market orders carry `0.0`; the matching procedure
    /// ignores price for market aggressors.
    pub price: f64,

    /// Remaining unfilled quantity.
    pub quantity: u32,
}

impl Order {
    pub fn new(id: u64, order_type: OrderType, side: Side, price: f64, quantity: u32) -> Self {
        Order {
            id,
            order_type,
            side,
            price,
            quantity,
        }
    }

    /// Market orders carry no meaningful price.
    pub fn market(id: u64, side: Side, quantity: u32) -> Self {
        Order::new(id, OrderType::Market, side, 0.0, quantity)
    }

    pub fn limit(id: u64, side: Side, price: f64, quantity: u32) -> Self {
        Order::new(id, OrderType::Limit, side, price, quantity)
    }

    pub fn good_till_canceled(id: u64, side: Side, price: f64, quantity: u32) -> Self {
        Order::new(id, OrderType::GoodTillCanceled, side, price, quantity)
    }

    pub fn fill_or_kill_limit(id: u64, side: Side, price: f64, quantity: u32) -> Self {
        Order::new(id, OrderType::FillOrKillLimit, side, price, quantity)
    }

    /// Returns `true` once the remaining quantity hits zero.
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill the order by up to `qty` units, saturating at zero.
    ///
    /// Returns the quantity actually absorbed (`<= qty` and
    /// `<= self.quantity` before the call). An aggressor whose quantity
    /// exceeds the resting size therefore depletes the resting order rather
    /// than driving it negative.
    pub fn fill(&mut self, qty: u32) -> u32 {
        let filled = qty.min(self.quantity);
        self.quantity -= filled;
        filled
    }
}
