use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use trading_dataflows::config::Settings;
use trading_dataflows::global::Global;
use trading_dataflows::sources::brave;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Settings::new()?;

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy(&config.logging.level),
        )
        .init();

    tracing::info!("starting trading dataflows");

    let global = Global::init(config)?;

    let curr_date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());

    let digest = brave::fetch_global_news(
        &global,
        &curr_date,
        brave::DEFAULT_LOOK_BACK_DAYS,
        brave::DEFAULT_LIMIT,
    )
    .await?;

    if digest.is_empty() {
        tracing::info!(%curr_date, "no news in window");
    } else {
        println!("{digest}");
    }

    Ok(())
}
