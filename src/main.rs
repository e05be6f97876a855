use actix_web::{middleware::Logger, web, App, HttpServer};
use metrics_exporter_prometheus::PrometheusBuilder;

use hello_backend::{
    config::settings::Settings,
    middleware::metrics::Metrics,
    routes::{configure_app, not_found},
};


fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let settings = Settings::new().unwrap_or_else(|e| {
        log::error!("Failed to load settings: {e}");
        std::process::exit(1);
    });

    // Metrics are optional: the server still runs if the recorder can't be installed.
    let prometheus = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(web::Data::new(handle)),
        Err(e) => {
            log::warn!("prometheus recorder not installed: {e}");
            None
        }
    };

    let (host, port) = settings.bind_addr();
    log::info!("Starting hello backend on {host}:{port}");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Metrics)
            .wrap(Logger::default());

        if let Some(handle) = prometheus.clone() {
            app = app.app_data(handle);
        }

        app.configure(configure_app)
            .default_service(web::to(not_found))
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}
