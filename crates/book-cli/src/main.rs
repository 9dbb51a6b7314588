//! Command-line driver for the order book.
//!
//! With `BOOK_INPUT_FILE` set, replays the command file it names (see
//! `book_report::text_codec` for the line format). Otherwise runs a
//! built-in scenario that exercises every order type: limit resting,
//! market sweeps, good-till-canceled rounds, crossing limits, and a
//! cancellation. Report lines go to stdout; diagnostics go through
//! `tracing`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use book_core::{BookEvent, Order, OrderBook, Side};
use book_report::{format_event, parse_command_line, write_orders, Command};

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.input_file {
        Some(path) => replay_file(path, &mut out),
        None => run_demo(&mut out),
    }
}

/// Replay a command file line by line against a fresh book.
fn replay_file(path: &Path, out: &mut impl Write) -> Result<()> {
    info!(path = %path.display(), "replaying command file");

    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut book = OrderBook::new();
    for (lineno, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_command_line(line) {
            Some(command) => apply(&mut book, command, out)?,
            None => warn!(lineno = lineno + 1, line, "skipping malformed command"),
        }
    }
    Ok(())
}

/// Apply one command, printing any report lines it produces.
fn apply(book: &mut OrderBook, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::New(order) => {
            let id = order.id;
            if let Err(err) = book.add_order(order) {
                warn!(id, %err, "order rejected");
            }
        }
        Command::Cancel(id) => print_events(&book.cancel_order(id), out)?,
        Command::Match => print_events(&book.match_orders(), out)?,
        Command::Print => write_orders(book, out)?,
    }
    Ok(())
}

fn print_events(events: &[BookEvent], out: &mut impl Write) -> Result<()> {
    for event in events {
        writeln!(out, "{}", format_event(event))?;
    }
    Ok(())
}

/// Built-in scenario: resting limits, a market sweep, a good-till-canceled
/// round, crossing limits, and a cancel.
fn run_demo(out: &mut impl Write) -> Result<()> {
    info!("BOOK_INPUT_FILE not set, running built-in scenario");

    let mut book = OrderBook::new();

    book.add_order(Order::limit(1, Side::Sell, 101.0, 100))?;
    book.add_order(Order::limit(2, Side::Sell, 102.0, 50))?;
    book.add_order(Order::limit(3, Side::Buy, 99.0, 120))?;
    book.add_order(Order::limit(4, Side::Buy, 98.5, 80))?;

    section(out, "After adding initial limit orders")?;
    write_orders(&book, out)?;

    book.add_order(Order::market(5, Side::Buy, 60))?;
    book.add_order(Order::market(6, Side::Sell, 50))?;

    section(out, "After adding market buy/sell orders")?;
    write_orders(&book, out)?;

    section(out, "Matching market orders")?;
    print_events(&book.match_orders(), out)?;
    section(out, "Order book after matching market orders")?;
    write_orders(&book, out)?;

    book.add_order(Order::good_till_canceled(7, Side::Buy, 100.5, 40))?;
    book.add_order(Order::good_till_canceled(8, Side::Sell, 98.8, 70))?;

    section(out, "After adding good-till-canceled buy/sell")?;
    write_orders(&book, out)?;

    section(out, "Matching good-till-canceled orders")?;
    print_events(&book.match_orders(), out)?;
    section(out, "Order book after matching good-till-canceled")?;
    write_orders(&book, out)?;

    book.add_order(Order::limit(9, Side::Buy, 101.0, 30))?;
    book.add_order(Order::limit(10, Side::Sell, 99.0, 30))?;

    section(out, "After adding crossing limit orders")?;
    write_orders(&book, out)?;

    section(out, "Matching remaining limit orders")?;
    print_events(&book.match_orders(), out)?;
    section(out, "Order book after matching remaining limits")?;
    write_orders(&book, out)?;

    section(out, "Cancel order id 2 (if present)")?;
    print_events(&book.cancel_order(2), out)?;
    section(out, "Final order book")?;
    write_orders(&book, out)?;

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n--- {title} ---")?;
    Ok(())
}
