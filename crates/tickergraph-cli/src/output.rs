//! Terminal rendering for quote tables, charts and notices.
//!
//! Table cells come from already-normalized field values, so rendering is
//! padding plus a percent suffix on the performance columns. A sentinel
//! field stays the bare sentinel with no suffix.

use colored::Colorize;

use tickergraph_core::{FieldValue, IndexQuote, MarketState, SymbolQuote};

const NAME_WIDTH: usize = 22;
const NUM_WIDTH: usize = 10;

pub fn market_banner(state: MarketState) {
    let line = format!("Market is currently {}", state.as_str().to_uppercase());
    println!("{}", line.yellow().bold());
    println!();
}

pub fn notice(message: &str) {
    eprintln!("{}", message.yellow());
}

pub fn print_chart(symbol: &str, rendered: &str) {
    println!("{}", symbol.cyan().bold());
    print!("{rendered}");
    println!();
}

pub fn print_symbol_quotes(quotes: &[SymbolQuote]) {
    let header = [
        format!("{:<8}", "Symbol"),
        format!("{:<NAME_WIDTH$}", "Name"),
        format!("{:>NUM_WIDTH$}", "Current"),
        format!("{:>NUM_WIDTH$}", "Chng"),
        format!("{:>NUM_WIDTH$}", "Chng%"),
        format!("{:>NUM_WIDTH$}", "DayLow"),
        format!("{:>NUM_WIDTH$}", "DayHigh"),
        format!("{:>NUM_WIDTH$}", "52WLow"),
        format!("{:>NUM_WIDTH$}", "52WHigh"),
        format!("{:>NUM_WIDTH$}", "52WChng%"),
        format!("{:>NUM_WIDTH$}", "YTD%"),
        format!("{:>NUM_WIDTH$}", "1Y%"),
        String::from("Time"),
    ]
    .join(" ");
    println!("{}", header.cyan().bold());

    for quote in quotes {
        let row = [
            format!("{:<8}", quote.symbol.as_str()),
            format!("{:<NAME_WIDTH$}", truncate(quote.fullname.as_str(), NAME_WIDTH)),
            cell(&quote.latest_price, ""),
            cell(&quote.change, ""),
            cell(&quote.change_percent, "%"),
            cell(&quote.day_low, ""),
            cell(&quote.day_high, ""),
            cell(&quote.week52_low, ""),
            cell(&quote.week52_high, ""),
            cell(&quote.week52_change_percent, "%"),
            cell(&quote.ytd_change_percent, "%"),
            cell(&quote.one_year_change_percent, "%"),
            quote.time_stamp.as_str().to_owned(),
        ]
        .join(" ");
        print_row(&row, &quote.change);
    }
    println!();
}

pub fn print_index_quotes(quotes: &[IndexQuote]) {
    let header = [
        format!("{:<8}", "Index"),
        format!("{:>NUM_WIDTH$}", "Current"),
        format!("{:>NUM_WIDTH$}", "Chng"),
        format!("{:>NUM_WIDTH$}", "Chng%"),
        format!("{:>NUM_WIDTH$}", "52WLow"),
        format!("{:>NUM_WIDTH$}", "52WHigh"),
        format!("{:>NUM_WIDTH$}", "YTD%"),
        format!("{:>NUM_WIDTH$}", "1Y%"),
        String::from("Time"),
    ]
    .join(" ");
    println!("{}", header.cyan().bold());

    for quote in quotes {
        let row = [
            format!("{:<8}", quote.index.display_name()),
            cell(&quote.latest_price, ""),
            cell(&quote.change, ""),
            cell(&quote.change_percent, "%"),
            cell(&quote.week52_low, ""),
            cell(&quote.week52_high, ""),
            cell(&quote.ytd_change_percent, "%"),
            cell(&quote.one_year_change_percent, "%"),
            quote.time_stamp.as_str().to_owned(),
        ]
        .join(" ");
        print_row(&row, &quote.change);
    }
    println!();
}

/// Losing rows print red; everything else keeps the terminal default.
fn print_row(row: &str, change: &FieldValue) {
    let losing = change.as_f64().map(|v| v < 0.0).unwrap_or(false);
    if losing {
        println!("{}", row.red());
    } else {
        println!("{row}");
    }
}

fn cell(value: &FieldValue, suffix: &str) -> String {
    if value.is_sentinel() {
        format!("{:>NUM_WIDTH$}", value.as_str())
    } else {
        format!("{:>NUM_WIDTH$}", format!("{}{suffix}", value.as_str()))
    }
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
