//! Order type: how an order participates in matching.
//!
//! Matching runs in fixed priority passes: `Market` first, then
//! `GoodTillCanceled`, then `Limit`. `FillOrKillLimit` orders are accepted
//! into the book but never aggress in any pass; they can only be hit as
//! resting counter-orders (see `OrderBook::match_orders`).

/// Order type.
///
/// The ordinal (see [`OrderType::as_ordinal`]) is stable and appears in
/// order listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrderType {
    Market,
    Limit,
    GoodTillCanceled,
    FillOrKillLimit,
}

impl OrderType {
    /// Stable numeric code used by `print_orders`-style listings.
    pub fn as_ordinal(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
            OrderType::GoodTillCanceled => 2,
            OrderType::FillOrKillLimit => 3,
        }
    }

    /// Single-letter code used by the command format.
    pub fn as_char(self) -> char {
        match self {
            OrderType::Market => 'M',
            OrderType::Limit => 'L',
            OrderType::GoodTillCanceled => 'G',
            OrderType::FillOrKillLimit => 'K',
        }
    }

    /// Try to parse from the single-letter code (case-sensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(OrderType::Market),
            'L' => Some(OrderType::Limit),
            'G' => Some(OrderType::GoodTillCanceled),
            'K' => Some(OrderType::FillOrKillLimit),
            _ => None,
        }
    }
}
