use std::sync::{Arc, OnceLock};

use crate::{
	adapters::repositories::{CommentRepository, PostRepository, Table},
	config::Config,
	domain::post::{Comment, Post},
	services::response::ServiceError,
};

/// Stores handed to every handler through axum `State`.
#[derive(Clone)]
pub struct PostState {
	pub posts: Arc<dyn PostRepository>,
	pub comments: Arc<dyn CommentRepository>,
}

impl PostState {
	pub fn new(
		posts: Arc<dyn PostRepository>,
		comments: Arc<dyn CommentRepository>,
	) -> Self {
		Self { posts, comments }
	}

	/// Fresh, empty process-local stores.
	pub fn in_memory() -> Self {
		Self::new(Arc::new(Table::<Post>::new()), Arc::new(Table::<Comment>::new()))
	}
}

pub fn config() -> Result<&'static Config, ServiceError> {
	static CONFIG: OnceLock<Config> = OnceLock::new();
	let config = match CONFIG.get() {
		None => {
			let config = Config::new()?;

			CONFIG.get_or_init(|| config)
		}
		Some(config) => config,
	};
	Ok(config)
}
