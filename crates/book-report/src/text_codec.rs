//! Text codec for the order book.
//!
//! Two halves, mirroring each boundary of the engine:
//!
//! Output (events / listings → report lines):
//!
//! - Trade:
//!   `Matched Order ID: <aggressor> with Order ID: <resting> at Price: <price> quantity: <qty>`
//!   with the price rendered to two decimals.
//!
//! - Cancel:
//!   `Canceled Order ID : <id>`
//!   (the space before the colon is part of the format).
//!
//! - Listing, one line per active order in arrival order:
//!   `Order ID: <id>, Type: <ordinal>, Side: <Buy|Sell>, Price: <price>, Quantity: <qty>`
//!
//! Input (lines → [`Command`], used by replay tooling):
//!
//! - New order: `N, id(int), type(char M|L|G|K), side(char B|S), price(float), qty(int)`
//! - Cancel:    `C, id(int)`
//! - Match:     `M`
//! - Print:     `P`
//!
//! Blank lines and `#` comments parse to `None`, as do malformed lines.

use std::io::{self, Write};

use book_core::{BookEvent, Canceled, Order, OrderBook, OrderType, Side, Trade};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new order to the book.
    New(Order),

    /// Cancel an order by id.
    Cancel(u64),

    /// Run one round of matching.
    Match,

    /// List the active orders.
    Print,
}

// -----------------------------------------------------------------------------
// Output formatting
// -----------------------------------------------------------------------------

/// Format a trade report line.
pub fn format_trade(trade: &Trade) -> String {
    format!(
        "Matched Order ID: {} with Order ID: {} at Price: {:.2} quantity: {}",
        trade.aggressor_id, trade.resting_id, trade.price, trade.quantity
    )
}

/// Format a cancellation report line.
pub fn format_canceled(canceled: &Canceled) -> String {
    format!("Canceled Order ID : {}", canceled.order_id)
}

/// Format any book event as its report line.
pub fn format_event(event: &BookEvent) -> String {
    match event {
        BookEvent::Trade(trade) => format_trade(trade),
        BookEvent::Canceled(canceled) => format_canceled(canceled),
    }
}

/// Format one order as a listing line.
pub fn format_order(order: &Order) -> String {
    format!(
        "Order ID: {}, Type: {}, Side: {}, Price: {}, Quantity: {}",
        order.id,
        order.order_type.as_ordinal(),
        order.side.as_str(),
        order.price,
        order.quantity
    )
}

/// Write the full listing (one line per active order, arrival order) to any
/// sink. Tests capture it into a `Vec<u8>`; the CLI points it at stdout.
pub fn write_orders<W: Write>(book: &OrderBook, w: &mut W) -> io::Result<()> {
    for order in book.orders() {
        writeln!(w, "{}", format_order(order))?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Input parsing
// -----------------------------------------------------------------------------

/// Parse a single line into a [`Command`].
///
/// Returns `None` for blank lines, comments (starting with `#`), and
/// anything malformed.
pub fn parse_command_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let tokens = split_and_trim(trimmed, ',');
    if tokens.is_empty() {
        return None;
    }

    match tokens[0].as_str() {
        "N" => parse_new_order(&tokens),
        "C" => parse_cancel(&tokens),
        "M" if tokens.len() == 1 => Some(Command::Match),
        "P" if tokens.len() == 1 => Some(Command::Print),
        _ => None,
    }
}

fn parse_new_order(tokens: &[String]) -> Option<Command> {
    // N, id, type, side, price, qty
    if tokens.len() != 6 {
        return None;
    }

    let id = tokens[1].parse::<u64>().ok()?;
    let order_type = OrderType::from_char(single_char(&tokens[2])?)?;
    let side = Side::from_char(single_char(&tokens[3])?)?;
    let price = tokens[4].parse::<f64>().ok()?;
    let quantity = tokens[5].parse::<u32>().ok()?;

    Some(Command::New(Order::new(id, order_type, side, price, quantity)))
}

fn parse_cancel(tokens: &[String]) -> Option<Command> {
    // C, id
    if tokens.len() != 2 {
        return None;
    }

    let id = tokens[1].parse::<u64>().ok()?;
    Some(Command::Cancel(id))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c)
}

fn split_and_trim(line: &str, sep: char) -> Vec<String> {
    line.split(sep).map(|t| t.trim().to_string()).collect()
}
