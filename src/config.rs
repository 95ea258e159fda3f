use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::services::response::ServiceError;

pub struct Config {
	/// Default tracing filter level for this crate when `RUST_LOG` is unset
	pub log_level: String,

	/// Socket address (host and port) the server binds to
	pub server_ip_port: SocketAddr,

	/// Path the routes are mounted under. Empty or `/` mounts at the root.
	pub service_prefix: String,
	pub allow_origins: Vec<HeaderValue>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		let log_level = std::env::var("LOG_LEVEL").unwrap_or("info".to_string());
		let server_ip_port = std::env::var("SERVER_IP_PORT").unwrap_or("0.0.0.0:8000".into());
		let service_prefix = std::env::var("SERVICE_PREFIX").unwrap_or("/postapi".into());
		let allow_origins =
			std::env::var("ALLOW_ORIGINS").unwrap_or("http://localhost:3000,http://localhost:8000".to_string());

		Config::from_parts(log_level, &server_ip_port, service_prefix, &allow_origins)
	}

	pub(crate) fn from_parts(
		log_level: String,
		server_ip_port: &str,
		service_prefix: String,
		allow_origins: &str,
	) -> Result<Config, ServiceError> {
		let server_ip_port = server_ip_port
			.parse::<SocketAddr>()
			.map_err(|err| ServiceError::ConfigError(format!("SERVER_IP_PORT `{}`: {}", server_ip_port, err)))?;

		let allow_origins = allow_origins
			.split(',')
			.map(str::trim)
			.filter(|origin| !origin.is_empty())
			.map(|origin| {
				origin
					.parse::<HeaderValue>()
					.map_err(|err| ServiceError::ConfigError(format!("ALLOW_ORIGINS `{}`: {}", origin, err)))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Config {
			log_level,
			server_ip_port,
			service_prefix,
			allow_origins,
		})
	}
}
