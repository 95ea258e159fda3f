pub mod adapters;
pub mod common;
pub mod config;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
	dependencies::PostState,
	routes::{index, method_not_allowed, post_routers, route_not_found},
};

/// Mounts the post routes under `service_prefix`; an empty prefix or `/` mounts them at the root.
///
/// The hello route answers on the prefix both with and without a trailing slash. Unmatched
/// paths fall back to a 404 with a `detail` body.
pub fn create_app(
	state: PostState,
	service_prefix: &str,
) -> Router {
	let service_prefix = service_prefix.trim_matches('/');
	let routers = if service_prefix.is_empty() {
		post_routers()
	} else {
		Router::new()
			.nest(&format!("/{}", service_prefix), post_routers())
			.route(&format!("/{}/", service_prefix), get(index).fallback(method_not_allowed))
	};

	routers.fallback(route_not_found).with_state(state).layer(TraceLayer::new_for_http())
}
