use serde::{Deserialize, Serialize};

/// A top-level text record. `id` is assigned by the store and never changes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Post {
	pub id: i64,
	pub body: String,
}

/// A text record attached to exactly one [`Post`].
///
/// `post_id` is a lookup into the post id space, checked only when the
/// comment is created.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Comment {
	pub id: i64,
	pub body: String,
	pub post_id: i64,
}
