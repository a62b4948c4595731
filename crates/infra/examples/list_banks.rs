//! Lists Nigerian banks and reads the merchant balance.
//!
//! Reads keys from `KORAPAY_PUBLIC_KEY`, `KORAPAY_SECRET_KEY` and
//! `KORAPAY_ENCRYPTION_KEY` (a `.env` file in the working directory works
//! too) and client settings from `korapay.toml` if present.
//!
//! ```sh
//! cargo run -p korapay-infra --example list_banks
//! ```

use korapay_infra::{config, AsyncKorapayClient, Country, KorapayApi, KorapayError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), KorapayError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = config::load_dotenv(None) {
        tracing::debug!(error = %err, "no .env file loaded");
    }

    let client = AsyncKorapayClient::builder().config(config::load()?).build_async()?;

    let (banks, balances) = tokio::join!(client.get_banks(Country::Nigeria), client.get_balances());

    let banks = banks?;
    if !banks.is_success() {
        tracing::warn!(status_code = banks.status_code, message = %banks.message, "bank list rejected");
    }
    for bank in banks.data.iter().flat_map(|data| data.as_array().into_iter().flatten()) {
        tracing::info!(name = %bank["name"], code = %bank["code"], "bank");
    }

    let balances = balances?;
    tracing::info!(status_code = balances.status_code, data = ?balances.data, "balances");
    Ok(())
}
