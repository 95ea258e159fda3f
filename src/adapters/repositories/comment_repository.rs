use async_trait::async_trait;

use super::{CommentRepository, Table};
use crate::{domain::post::Comment, services::response::ServiceError};

#[async_trait]
impl CommentRepository for Table<Comment> {
	async fn create(&self, body: String, post_id: i64) -> Result<Comment, ServiceError> {
		Ok(self.insert_with(|id| Comment { id, body, post_id }).await)
	}

	// linear scan
	async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, ServiceError> {
		Ok(self.filter(|comment| comment.post_id == post_id).await)
	}
}
