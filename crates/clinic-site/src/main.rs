mod admin_gate;
mod config;
mod error;
mod render;
mod server;

use clinic_cms::{CmsClient, CmsClientConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::SiteConfig;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_ansi(false)
        .init();

    info!("starting clinic-site");

    let cms_config = CmsClientConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "CMS credentials are not configured");
    })?;
    info!(
        base_url = %cms_config.base_url,
        timeout_secs = cms_config.timeout.map(|t| t.as_secs()),
        "cms client configured"
    );
    let cms = CmsClient::new(cms_config)?;

    let site_config = SiteConfig::from_env();
    let addr = site_config.addr.clone();
    info!(
        home_news_limit = site_config.home_news_limit,
        news_limit = site_config.news_limit,
        "site configured"
    );

    let state = AppState::new(cms, site_config);
    info!(admin_enabled = state.admin_gate.is_enabled(), "admin listing");
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
