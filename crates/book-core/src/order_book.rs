//! Single-instrument order book with type-priority matching.
//!
//! The store is a flat, insertion-ordered sequence: an order's position
//! encodes its arrival. Matching runs in three fixed passes (market, then
//! good-till-canceled, then limit) and inside each pass takes the *first*
//! crossable counter-order in arrival order. There is no best-bid/best-ask
//! structure; replacing the linear scan with price-sorted books would change
//! which counter-order wins when several cross, so the scan is kept as-is.
//!
//! Mutation during a pass is handled with index bookkeeping rather than by
//! erasing under live iterators: each execution removes the aggressor (and
//! the resting order when depleted) and shifts the scan cursor so that later
//! candidates in the same pass see the mutated store.

use crate::error::BookError;
use crate::events::BookEvent;
use crate::order::Order;
use crate::order_type::OrderType;
use crate::side::Side;

/// Matching passes, in priority order. Fill-or-kill-limit orders never get
/// a pass of their own: they rest in the book and are only ever hit as
/// counter-orders.
const PASS_ORDER: [OrderType; 3] = [
    OrderType::Market,
    OrderType::GoodTillCanceled,
    OrderType::Limit,
];

/// Single-instrument order book.
///
/// Not internally synchronized: every operation takes `&mut self`, so
/// concurrent callers must serialize behind their own lock.
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Active orders, arrival-ordered. Appended on insert; removed at an
    /// arbitrary position on cancel or match.
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create a new, empty book.
    pub fn new() -> Self {
        OrderBook::default()
    }

    /// Insert an order at the back of the store.
    ///
    /// The only validation is id uniqueness among currently active orders;
    /// price sign and quantity are accepted as given.
    pub fn add_order(&mut self, order: Order) -> Result<(), BookError> {
        if self.orders.iter().any(|o| o.id == order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }
        self.orders.push(order);
        Ok(())
    }

    /// Cancel the active order with this id.
    ///
    /// Emits a [`BookEvent::Canceled`] when the order existed; an unknown id
    /// is a silent no-op.
    pub fn cancel_order(&mut self, order_id: u64) -> Vec<BookEvent> {
        match self.orders.iter().position(|o| o.id == order_id) {
            Some(idx) => {
                self.orders.remove(idx);
                vec![BookEvent::canceled(order_id)]
            }
            None => Vec::new(),
        }
    }

    /// Run one full round of matching and return the trades it produced.
    ///
    /// Three sequential passes over the entire current store, in fixed
    /// priority: market, good-till-canceled, limit. Within a pass each
    /// candidate of the pass's type searches the whole store (any type) for
    /// the first opposite-sided, price-crossing order in arrival order:
    ///
    /// - no counter-order: the candidate stays resting;
    /// - found: execute at the *resting* order's price for the aggressor's
    ///   full quantity, decrement the resting order (removing it when
    ///   depleted), and remove the aggressor unconditionally. One aggressor
    ///   executes at most once per round.
    ///
    /// Calling this again when nothing crosses is a no-op, so drivers may
    /// invoke it after every batch of submissions.
    pub fn match_orders(&mut self) -> Vec<BookEvent> {
        let mut events = Vec::new();
        for pass in PASS_ORDER {
            self.match_pass(pass, &mut events);
        }
        events
    }

    /// Active orders in arrival order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Look up an active order by id.
    pub fn get(&self, order_id: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Number of active orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Drop every active order.
    pub fn flush(&mut self) {
        self.orders.clear();
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// One pass: scan arrival order for candidates of `pass` type and
    /// execute each against its first crossable counter-order, if any.
    fn match_pass(&mut self, pass: OrderType, events: &mut Vec<BookEvent>) {
        let mut idx = 0;
        while idx < self.orders.len() {
            if self.orders[idx].order_type != pass {
                idx += 1;
                continue;
            }
            match self.find_match(idx, false) {
                Some(counter) => {
                    // The candidate is consumed; the cursor lands on the next
                    // unvisited order, adjusted for the removals.
                    idx = self.execute(idx, counter, events);
                }
                None => idx += 1,
            }
        }
    }

    /// First order in arrival order that the aggressor at `aggressor_idx`
    /// can execute against.
    ///
    /// Eligibility: opposite side, price-crossing, and (only when
    /// `full_match` is set) enough resting quantity to cover the aggressor.
    /// No call site enables `full_match` today; partial coverage is allowed.
    fn find_match(&self, aggressor_idx: usize, full_match: bool) -> Option<usize> {
        let aggressor = &self.orders[aggressor_idx];
        self.orders.iter().position(|resting| {
            resting.side == aggressor.side.opposite()
                && Self::crosses(aggressor, resting)
                && (!full_match || resting.quantity >= aggressor.quantity)
        })
    }

    /// Price-crossing predicate, evaluated from the aggressor's side.
    ///
    /// A market aggressor crosses any counter-order regardless of price;
    /// otherwise a buy crosses resting offers priced at or below it and a
    /// sell crosses resting bids priced at or above it.
    fn crosses(aggressor: &Order, resting: &Order) -> bool {
        if aggressor.order_type == OrderType::Market {
            return true;
        }
        match aggressor.side {
            Side::Buy => resting.price <= aggressor.price,
            Side::Sell => resting.price >= aggressor.price,
        }
    }

    /// Execute the aggressor at `aggressor_idx` against the resting order at
    /// `resting_idx` and return the index where the pass scan resumes.
    ///
    /// The trade reports the resting price and the aggressor's full
    /// quantity. The resting order absorbs up to its remaining size
    /// (quantity floors at zero) and is removed once depleted; the aggressor
    /// is removed unconditionally.
    fn execute(
        &mut self,
        aggressor_idx: usize,
        resting_idx: usize,
        events: &mut Vec<BookEvent>,
    ) -> usize {
        debug_assert_ne!(aggressor_idx, resting_idx);

        let fill_qty = self.orders[aggressor_idx].quantity;
        let fill_price = self.orders[resting_idx].price;
        events.push(BookEvent::trade(
            self.orders[aggressor_idx].id,
            self.orders[resting_idx].id,
            fill_price,
            fill_qty,
        ));

        self.orders[resting_idx].fill(fill_qty);
        let resting_depleted = self.orders[resting_idx].is_filled();

        if resting_depleted {
            // Remove the higher index first so the lower one stays valid.
            let (hi, lo) = if aggressor_idx > resting_idx {
                (aggressor_idx, resting_idx)
            } else {
                (resting_idx, aggressor_idx)
            };
            self.orders.remove(hi);
            self.orders.remove(lo);
        } else {
            self.orders.remove(aggressor_idx);
        }

        // Resume where the aggressor sat, shifted left once if a depleted
        // resting order was removed from an earlier slot.
        if resting_depleted && resting_idx < aggressor_idx {
            aggressor_idx - 1
        } else {
            aggressor_idx
        }
    }
}
