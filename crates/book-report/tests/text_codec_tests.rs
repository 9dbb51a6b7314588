// crates/book-report/tests/text_codec_tests.rs

use book_core::{BookEvent, Order, OrderBook, OrderType, Side};
use book_report::{
    format_canceled, format_event, format_order, format_trade, parse_command_line, write_orders,
    Command,
};
use book_core::{Canceled, Trade};

#[test]
fn trade_lines_render_price_to_two_decimals() {
    let trade = Trade {
        aggressor_id: 5,
        resting_id: 1,
        price: 101.0,
        quantity: 60,
    };
    assert_eq!(
        format_trade(&trade),
        "Matched Order ID: 5 with Order ID: 1 at Price: 101.00 quantity: 60"
    );

    let trade = Trade {
        aggressor_id: 8,
        resting_id: 3,
        price: 98.8,
        quantity: 30,
    };
    assert_eq!(
        format_trade(&trade),
        "Matched Order ID: 8 with Order ID: 3 at Price: 98.80 quantity: 30"
    );
}

#[test]
fn cancel_line_keeps_the_legacy_spacing() {
    let canceled = Canceled { order_id: 2 };
    assert_eq!(format_canceled(&canceled), "Canceled Order ID : 2");
}

#[test]
fn events_dispatch_to_their_line_format() {
    let trade = BookEvent::trade(6, 3, 99.0, 50);
    assert_eq!(
        format_event(&trade),
        "Matched Order ID: 6 with Order ID: 3 at Price: 99.00 quantity: 50"
    );
    let canceled = BookEvent::canceled(7);
    assert_eq!(format_event(&canceled), "Canceled Order ID : 7");
}

#[test]
fn order_lines_show_type_ordinal_and_side_name() {
    let order = Order::limit(1, Side::Sell, 101.0, 100);
    assert_eq!(
        format_order(&order),
        "Order ID: 1, Type: 1, Side: Sell, Price: 101, Quantity: 100"
    );

    let order = Order::limit(4, Side::Buy, 98.5, 80);
    assert_eq!(
        format_order(&order),
        "Order ID: 4, Type: 1, Side: Buy, Price: 98.5, Quantity: 80"
    );

    let order = Order::market(5, Side::Buy, 60);
    assert_eq!(
        format_order(&order),
        "Order ID: 5, Type: 0, Side: Buy, Price: 0, Quantity: 60"
    );

    let order = Order::good_till_canceled(7, Side::Buy, 100.5, 40);
    assert_eq!(
        format_order(&order),
        "Order ID: 7, Type: 2, Side: Buy, Price: 100.5, Quantity: 40"
    );

    let order = Order::fill_or_kill_limit(9, Side::Sell, 99.0, 25);
    assert_eq!(
        format_order(&order),
        "Order ID: 9, Type: 3, Side: Sell, Price: 99, Quantity: 25"
    );
}

#[test]
fn listings_follow_arrival_order() {
    let mut book = OrderBook::new();
    book.add_order(Order::limit(1, Side::Sell, 101.0, 100)).unwrap();
    book.add_order(Order::limit(3, Side::Buy, 99.0, 120)).unwrap();

    let mut buf = Vec::new();
    write_orders(&book, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "Order ID: 1, Type: 1, Side: Sell, Price: 101, Quantity: 100\n\
         Order ID: 3, Type: 1, Side: Buy, Price: 99, Quantity: 120\n"
    );
}

#[test]
fn parses_new_order_commands() {
    let command = parse_command_line("N, 3, L, B, 99.0, 120").unwrap();
    assert_eq!(
        command,
        Command::New(Order::new(3, OrderType::Limit, Side::Buy, 99.0, 120))
    );

    let command = parse_command_line("N, 5, M, B, 0, 60").unwrap();
    assert_eq!(
        command,
        Command::New(Order::new(5, OrderType::Market, Side::Buy, 0.0, 60))
    );

    let command = parse_command_line("N, 8, G, S, 98.8, 70").unwrap();
    assert_eq!(
        command,
        Command::New(Order::new(8, OrderType::GoodTillCanceled, Side::Sell, 98.8, 70))
    );
}

#[test]
fn parses_cancel_match_and_print() {
    assert_eq!(parse_command_line("C, 2"), Some(Command::Cancel(2)));
    assert_eq!(parse_command_line("M"), Some(Command::Match));
    assert_eq!(parse_command_line("P"), Some(Command::Print));
}

#[test]
fn skips_blanks_comments_and_malformed_lines() {
    assert_eq!(parse_command_line(""), None);
    assert_eq!(parse_command_line("   "), None);
    assert_eq!(parse_command_line("# a comment"), None);
    assert_eq!(parse_command_line("X, 1"), None);
    assert_eq!(parse_command_line("N, 1, L, B, 99.0"), None); // missing qty
    assert_eq!(parse_command_line("N, 1, Q, B, 99.0, 10"), None); // bad type
    assert_eq!(parse_command_line("N, 1, L, Z, 99.0, 10"), None); // bad side
    assert_eq!(parse_command_line("C, two"), None);
    assert_eq!(parse_command_line("M, 1"), None);
}
