//! Console entry-point: loads settings, wires REST endpoints, the console
//! WebSocket and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use interview_console::inbound::http::health::HealthState;
use interview_console::outbound::record_store::RecordStoreClient;
use interview_console::settings::ConsoleSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mut settings = ConsoleSettings::load().wrap_err("failed to load console settings")?;
    info!(?settings, "loaded console settings");

    let allowed_origin = settings
        .allowed_origin
        .as_deref()
        .map(Url::parse)
        .transpose()
        .wrap_err("CONSOLE_ALLOWED_ORIGIN is not a valid URL")?;

    let bind_addr = settings.bind_addr();
    let mut config = ServerConfig::new(bind_addr).with_allowed_origin(allowed_origin);
    if let Some((url, key)) = settings.take_store_credentials()? {
        let client = RecordStoreClient::new(&url, key, settings.store_timeout())
            .wrap_err("failed to configure record store client")?;
        config = config.with_record_store(client);
    }
    drop(settings);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    info!(addr = %bind_addr, "console listening");
    server.await.wrap_err("HTTP server terminated")
}
