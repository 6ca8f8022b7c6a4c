use std::sync::Arc;

use crate::config::{Config, LogFormat};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use networth_core::{
    certificates::{CertificateService, CertificateServiceTrait},
    document::{DocumentRenderer, DocxCertificateRenderer},
    fx::{FxService, FxServiceTrait},
    persons::{PersonService, PersonServiceTrait},
};
use networth_market_data::ExchangeRateApiProvider;
use networth_storage_sqlite::{
    certificates::CertificateRepository,
    db::{self, spawn_writer},
    persons::PersonRepository,
};

pub struct AppState {
    pub person_service: Arc<dyn PersonServiceTrait + Send + Sync>,
    pub certificate_service: Arc<dyn CertificateServiceTrait + Send + Sync>,
    pub fx_service: Arc<dyn FxServiceTrait + Send + Sync>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub default_exchange_rate: f64,
}

/// Installs the global subscriber. `log` records from the library crates are
/// bridged into it.
pub fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()?,
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()?,
    }
    Ok(())
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let person_repository = Arc::new(PersonRepository::new(pool.clone(), writer.clone()));
    let person_service = Arc::new(PersonService::new(person_repository));

    let renderer: Arc<dyn DocumentRenderer> = Arc::new(DocxCertificateRenderer::new());
    let certificate_repository = Arc::new(CertificateRepository::new(pool.clone(), writer));
    let certificate_service = Arc::new(CertificateService::new(
        certificate_repository,
        renderer.clone(),
    ));

    let provider = Arc::new(ExchangeRateApiProvider::with_config(
        &config.rate_api_url,
        config.rate_timeout,
    ));
    let fx_service = Arc::new(FxService::new(provider).with_timeout(config.rate_timeout));

    Ok(Arc::new(AppState {
        person_service,
        certificate_service,
        fx_service,
        renderer,
        default_exchange_rate: config.default_exchange_rate,
    }))
}
