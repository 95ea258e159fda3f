// domain for posts and the comments attached to them
pub mod entity;
pub mod schemas;

pub use self::entity::{Comment, Post};
pub use self::schemas::{CommentIn, UserPostIn, UserPostWithComments, Validate};
