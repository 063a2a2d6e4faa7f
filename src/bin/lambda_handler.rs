//! Lambda entry point serving the comparison API
//!
//! Reads an optional JSON config from `COMPARATOR_CONFIG`.

use financing_comparator::{http::handle_request, ComparatorConfig, Comparator};
use lambda_http::{run, service_fn, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = ComparatorConfig::from_env()?;
    log::info!(
        "starting comparator: flat {}% vs bank {}%, principal {}..={}, terms {:?}",
        config.flat_rate_percent,
        config.bank_rate_percent,
        config.min_principal,
        config.max_principal,
        config.allowed_terms
    );

    let comparator = Comparator::new(config);
    let comparator = &comparator;

    run(service_fn(move |event: Request| async move {
        handle_request(comparator, event).await
    }))
    .await
}
