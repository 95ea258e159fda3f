use serde::{Deserialize, Serialize};

use super::entity::{Comment, Post};
use crate::services::response::ServiceError;

/// Shape checks that serde cannot express on its own.
pub trait Validate {
	fn validate(&self) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPostIn {
	pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentIn {
	pub body: String,
	pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPostWithComments {
	pub post: Post,
	pub comments: Vec<Comment>,
}

fn non_empty(field: &str, value: &str) -> Result<(), ServiceError> {
	if value.is_empty() {
		return Err(ServiceError::ValidationError(format!("{}: must not be empty", field)));
	}
	Ok(())
}

impl Validate for UserPostIn {
	fn validate(&self) -> Result<(), ServiceError> {
		non_empty("body", &self.body)
	}
}

impl Validate for CommentIn {
	fn validate(&self) -> Result<(), ServiceError> {
		non_empty("body", &self.body)
	}
}

#[test]
fn test_empty_body_is_rejected() {
	let post = UserPostIn { body: String::new() };
	assert_eq!(post.validate(), Err(ServiceError::ValidationError("body: must not be empty".into())));

	let comment = CommentIn {
		body: "first!".into(),
		post_id: 0,
	};
	assert!(comment.validate().is_ok());
}

#[test]
fn test_comment_in_requires_post_id() {
	let parsed = serde_json::from_str::<CommentIn>(r#"{"body": "Test Comment"}"#);
	assert!(parsed.is_err());

	let parsed = serde_json::from_str::<CommentIn>(r#"{"body": "Test Comment", "post_id": "zero"}"#);
	assert!(parsed.is_err());
}
