//! Order placement example.
//!
//! Fetches the current BTC quote and builds a small limit buy one percent
//! under the ask. The actual placement is commented out; uncomment it to
//! send a real order.
//!
//! Run with: cargo run --example place_order

use robinhood_crypto_rs::models::{CryptoOrderOptions, QuoteOptions};
use robinhood_crypto_rs::{ClientConfig, ClientOptions, RobinhoodClient};
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> robinhood_crypto_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = RobinhoodClient::new(ClientOptions::from_env(), ClientConfig::default())?;
    client.start_up().await?;

    let quote = client.quotes().get(QuoteOptions::symbol("BTC")).await?;
    println!("BTC ask: {}", quote.ask_price);
    if let Some(bid) = quote.bid_price {
        println!("BTC bid: {}", bid);
    }

    let limit_price = (quote.ask_price * dec!(0.99))
        .round_dp_with_strategy(2, RoundingStrategy::ToZero);

    // $5 worth of BTC at the limit price
    let options = CryptoOrderOptions::new()
        .symbol("BTC")
        .order_value(dec!(5))
        .currency_price(limit_price);

    println!("\nWould place limit buy: {:?}", options);

    // let order = client.orders().limit_buy(options).await?;
    // println!("Order placed!");
    // println!("  Order ID: {:?}", order.id);
    // println!("  State: {:?}", order.state);

    println!("\nDone!");
    Ok(())
}
