//! book-report
//!
//! Text-level encoding for the order book:
//! - [`text_codec`] : report-line formatting plus the replay command format.

pub mod text_codec;

pub use text_codec::{
    format_canceled,
    format_event,
    format_order,
    format_trade,
    parse_command_line,
    write_orders,
    Command,
};
