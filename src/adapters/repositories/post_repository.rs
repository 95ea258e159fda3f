use async_trait::async_trait;

use super::{PostRepository, Table};
use crate::{domain::post::Post, services::response::ServiceError};

#[async_trait]
impl PostRepository for Table<Post> {
	async fn create(&self, body: String) -> Result<Post, ServiceError> {
		Ok(self.insert_with(|id| Post { id, body }).await)
	}

	async fn get(&self, id: i64) -> Result<Option<Post>, ServiceError> {
		Ok(self.find(|post| post.id == id).await)
	}

	async fn list_all(&self) -> Result<Vec<Post>, ServiceError> {
		Ok(self.all().await)
	}
}
