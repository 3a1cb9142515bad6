use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};

use ticketboard::config;
use ticketboard::routes;
use ticketboard::source::{self, SnapshotStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("Starting Ticketboard server on {}:{}", config.host, config.port);
    log::info!(
        "Default view: grouping={}, ordering={}",
        config.board.grouping,
        config.board.ordering
    );

    let data_source = source::create_data_source(&config.data_source).map_err(|e| {
        log::error!("Data source error: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    // Tickets are fetched once, on the first request that needs them
    let store = web::Data::new(SnapshotStore::new(data_source));
    let defaults = web::Data::new(config.board);

    let host = config.host.clone();
    let port = config.port;

    let server = HttpServer::new(move || {
        // The board is read-only, so any origin may read it
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::ACCEPT,
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .app_data(store.clone())
            .app_data(defaults.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .wrap(cors)
            .configure(routes::health::configure)
            .configure(routes::board::configure)
    })
    .bind((host.as_str(), port))?
    .shutdown_timeout(30)
    .run();

    // Spawn graceful shutdown handler
    let server_handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        log::info!("Shutdown signal received, stopping server...");
        server_handle.stop(true).await;
    });

    server.await
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
