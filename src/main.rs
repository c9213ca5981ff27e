mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::setup_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_state(&config, db)?;

    let router = server::router::router(config.import_max_upload_size)
        .with_state(state)
        .layer(startup::cors_layer());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
