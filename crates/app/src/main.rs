use anyhow::Context;

use renoovy_app::{AppConfig, AppContainer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    renoovy_observability::init();

    let config = AppConfig::from_env();
    tracing::info!(
        currency = %config.currency,
        featured_limit = config.featured_limit,
        "starting"
    );

    let container = AppContainer::in_memory(config)
        .context("failed to seed storefront content")?;
    let page = container
        .landing_page()
        .await
        .context("failed to build landing page")?;

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
