use anyhow::Result;
use ecoportal::{EcoConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = EcoConfig::load()?;
    logging::init(&config.logging)?;

    let credentials = &config.credentials;
    for (name, present) in [
        (ecoportal::config::OPENWEATHER_API_KEY, credentials.openweather.is_some()),
        (ecoportal::config::YOUTUBE_API_KEY, credentials.youtube.is_some()),
        (ecoportal::config::NEWSDATA_API_KEY, credentials.newsdata.is_some()),
    ] {
        if !present {
            tracing::warn!("{} is not set; pages that need it will show a configuration error", name);
        }
    }

    web::run(config).await
}
