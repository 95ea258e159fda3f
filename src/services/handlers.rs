use crate::{
	dependencies::PostState,
	domain::post::{Comment, CommentIn, Post, UserPostIn, UserPostWithComments},
};

use super::response::ServiceError;

pub struct PostHandler;
impl PostHandler {
	pub async fn create_post(
		post: UserPostIn,
		state: &PostState,
	) -> Result<Post, ServiceError> {
		let post = state.posts.create(post.body).await?;
		tracing::info!(post_id = post.id, "Post created");
		Ok(post)
	}

	/// Refuses to store a comment whose `post_id` does not name an existing post.
	pub async fn create_comment(
		comment: CommentIn,
		state: &PostState,
	) -> Result<Comment, ServiceError> {
		if state.posts.get(comment.post_id).await?.is_none() {
			tracing::warn!(post_id = comment.post_id, "Comment on unknown post");
			return Err(ServiceError::PostNotFound);
		}

		let comment = state.comments.create(comment.body, comment.post_id).await?;
		tracing::info!(comment_id = comment.id, post_id = comment.post_id, "Comment created");
		Ok(comment)
	}

	/// No existence check on the post: an unknown id simply has no comments.
	pub async fn list_comments(
		post_id: i64,
		state: &PostState,
	) -> Result<Vec<Comment>, ServiceError> {
		tracing::debug!(post_id, "Listing comments");
		state.comments.list_by_post(post_id).await
	}

	pub async fn list_posts(state: &PostState) -> Result<Vec<Post>, ServiceError> {
		tracing::debug!("Listing posts");
		state.posts.list_all().await
	}

	/// Failures after the post lookup surface as [`ServiceError::InternalError`]
	/// carrying the underlying description.
	pub async fn get_post_with_comments(
		post_id: i64,
		state: &PostState,
	) -> Result<UserPostWithComments, ServiceError> {
		let post = state.posts.get(post_id).await?.ok_or_else(|| {
			tracing::warn!(post_id, "Post lookup missed");
			ServiceError::PostNotFound
		})?;

		let comments = PostHandler::list_comments(post_id, state).await.map_err(|err| {
			tracing::error!("Assembling post {} with comments failed :{:?}", post_id, err);
			ServiceError::InternalError(err.to_string())
		})?;

		Ok(UserPostWithComments { post, comments })
	}
}
