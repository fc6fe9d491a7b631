use backend::{config::Config, routes::router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = Config::from_env()?;
	info!("Read .env...");

	match &config.image_dir {
		Some(dir) => info!("Serving celebrant pictures from {dir:?}"),
		None => warn!("IMAGE_DIR isn't set in .env; the celebrant pictures won't load")
	}

	let app = router(&config);
	let listener = TcpListener::bind(config.addr).await?;

	info!("Serving axum on {}...", config.addr);

	axum::serve(listener, app).await?;

	Ok(())
}
