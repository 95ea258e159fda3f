pub(crate) mod comment_repository;
pub(crate) mod post_repository;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
	domain::post::{Comment, Post},
	services::response::ServiceError,
};

#[async_trait]
pub trait PostRepository: Send + Sync {
	async fn create(&self, body: String) -> Result<Post, ServiceError>;
	/// `Ok(None)` when no post carries `id`.
	async fn get(&self, id: i64) -> Result<Option<Post>, ServiceError>;
	/// All posts in creation order.
	async fn list_all(&self) -> Result<Vec<Post>, ServiceError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
	async fn create(&self, body: String, post_id: i64) -> Result<Comment, ServiceError>;
	/// Comments on `post_id` in creation order, empty when there are none.
	async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, ServiceError>;
}

/// Append-only in-memory table with its own id counter.
///
/// Id assignment and the push happen under one write guard, so ids are
/// unique under concurrent writers, rows are stored in id order, and
/// readers never see a half-inserted row. The counter is kept apart from
/// the row count.
pub struct Table<T> {
	inner: RwLock<Rows<T>>,
}

struct Rows<T> {
	next_id: i64,
	rows: Vec<T>,
}

impl<T> Default for Table<T> {
	fn default() -> Self {
		Self {
			inner: RwLock::new(Rows {
				next_id: 0,
				rows: Vec::new(),
			}),
		}
	}
}

impl<T: Clone> Table<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) async fn insert_with(
		&self,
		build: impl FnOnce(i64) -> T,
	) -> T {
		let mut table = self.inner.write().await;
		let id = table.next_id;
		table.next_id += 1;
		let row = build(id);
		table.rows.push(row.clone());
		row
	}

	pub(crate) async fn find(
		&self,
		predicate: impl Fn(&T) -> bool,
	) -> Option<T> {
		self.inner.read().await.rows.iter().find(|row| predicate(row)).cloned()
	}

	pub(crate) async fn filter(
		&self,
		predicate: impl Fn(&T) -> bool,
	) -> Vec<T> {
		self.inner.read().await.rows.iter().filter(|row| predicate(row)).cloned().collect()
	}

	pub(crate) async fn all(&self) -> Vec<T> {
		self.inner.read().await.rows.clone()
	}

	pub async fn len(&self) -> usize {
		self.inner.read().await.rows.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.len().await == 0
	}
}
