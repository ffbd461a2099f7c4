use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payee::config::{AppConfig, Config, LogFormat};
use payee::middleware::{ErrorHandler, RequestId};
use payee::modules::{health, processors};
use payee::processors::{
    InMemoryTransactionRepository, MySqlTransactionRepository, ProcessorService,
    TransactionRepository,
};

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| app.default_log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting Payee processor gateway");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let repository: Arc<dyn TransactionRepository> = match config.database {
        Some(ref database) => {
            let pool = database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            database.migrate(&pool).await?;
            tracing::info!(
                "Database pool initialized ({} connections)",
                database.max_connections
            );
            Arc::new(MySqlTransactionRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, transactions are kept in memory");
            Arc::new(InMemoryTransactionRepository::new())
        }
    };

    let service = Arc::new(ProcessorService::from_config(&config.processors, repository));
    for processor in service.list_processors() {
        tracing::info!(processor = %processor.name, "Processor enabled");
    }

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(service.clone()))
            .configure(health::configure)
            .configure(processors::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
