use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadRepository, SiteContext};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use datapace::config::AppConfig;
use datapace::error::AppError;
use datapace::leads::LeadIntakeService;
use datapace::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };
    let site_context = SiteContext {
        public_base_url: Arc::from(config.site.public_base_url.as_str()),
    };

    let repository = Arc::new(InMemoryLeadRepository::default());
    let intake_service = Arc::new(LeadIntakeService::new(repository));

    let app = with_site_routes(intake_service)
        .layer(Extension(app_state))
        .layer(Extension(site_context))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "datapace site backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
