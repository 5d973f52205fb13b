//! Scheduling service entry point.
//!
//! The engine itself is a pure computation; everything here is HTTP plumbing:
//! configuration, logging, metrics, and route wiring.

use actix_web::{App, HttpServer, middleware, web};
use actix_web_prometheus::PrometheusMetricsBuilder;

use schedule_engine::{config::Config, handlers, metrics};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let port = config.port;

    log::info!("starting HTTP server at http://0.0.0.0:{port}");
    log::info!(
        "working hours {:02}:00-{:02}:00 UTC, Monday-Friday; auth required: {}",
        config.workday.start_hour,
        config.workday.end_hour,
        config.auth.required
    );

    let app_data = handlers::AppState::from_config(config);

    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .registry(metrics::REGISTRY.clone())
        .build()
        .unwrap();
    // Register every engine metric now so the exported series are stable
    // from boot rather than appearing after the first request
    metrics::init();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_data.clone()))
            .wrap(prometheus.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
