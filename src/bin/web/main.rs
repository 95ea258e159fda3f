use axum::http::Method;
use postapi::{create_app, dependencies::config, dependencies::PostState};
use tower_http::cors::{AllowOrigin, CorsLayer};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("postapi={},web={},tower_http=debug,axum::rejection=trace", config.log_level, config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Stores
	let state = PostState::in_memory();

	let app = create_app(state, &config.service_prefix).layer(
		CorsLayer::new()
			.allow_origin(AllowOrigin::list(config.allow_origins.clone()))
			.allow_methods([Method::GET, Method::POST]),
	);

	tracing::info!("Start Web Server on {}{}", config.server_ip_port, config.service_prefix);
	axum::Server::bind(&config.server_ip_port).serve(app.into_make_service()).await?;
	Ok(())
}
