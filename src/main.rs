//! A greeting web service with axum.

use greeter_demo::{
    app,
    infra::{config, logging},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let _guard = logging::init_logging();
    let config = config::load_config()?;

    let addr = format!(
        "{}:{}",
        config.server.http_address, config.server.http_port
    );
    let listener = TcpListener::bind(&addr).await?;
    app::run_app(listener).await?;

    Ok(())
}
