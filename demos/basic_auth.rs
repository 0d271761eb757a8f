//! Basic authentication example.
//!
//! Logs in with credentials from the environment, resolves the account
//! identifiers and prints the crypto balances.
//!
//! Set ROBINHOOD_USERNAME and ROBINHOOD_PASSWORD (plus ROBINHOOD_MFA_CODE
//! for accounts with multi-factor auth), or ROBINHOOD_ACCESS_TOKEN.
//!
//! Run with: cargo run --example basic_auth

use robinhood_crypto_rs::{ClientConfig, ClientOptions, RobinhoodClient};

#[tokio::main]
async fn main() -> robinhood_crypto_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let options = ClientOptions::from_env();
    if !options.has_credentials() {
        eprintln!("Set ROBINHOOD_USERNAME/ROBINHOOD_PASSWORD or ROBINHOOD_ACCESS_TOKEN");
        return Ok(());
    }

    println!("Connecting to Robinhood...");

    let client = RobinhoodClient::new(options, ClientConfig::default())?;
    let refs = client.start_up().await?;

    println!("Successfully authenticated!");
    println!(
        "  Primary account: {}",
        refs.primary_account_url
            .as_ref()
            .map(|url| url.as_str())
            .unwrap_or("unresolved")
    );
    println!(
        "  Crypto account:  {}",
        refs.crypto_account_id
            .as_ref()
            .map(|id| id.as_str())
            .unwrap_or("unresolved")
    );

    let details = client.accounts().details().await?;
    println!("\nCrypto equity: {:?}", details.crypto_equity());
    println!(
        "Crypto buying power: {:?}",
        details.crypto_buying_power.map(|money| money.amount)
    );

    println!("\nDone!");
    Ok(())
}
