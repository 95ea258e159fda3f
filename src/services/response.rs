use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

pub const POST_NOT_FOUND: &str = "Post Not Found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
	/// Request body or path failed the schema.
	ValidationError(String),
	PostNotFound,
	/// No route matches the request path.
	RouteNotFound,
	MethodNotAllowed,
	/// Failure intercepted while assembling a combined response.
	InternalError(String),
	StoreError(String),
	ConfigError(String),
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
			ServiceError::PostNotFound | ServiceError::RouteNotFound => StatusCode::NOT_FOUND,
			ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			ServiceError::InternalError(_) | ServiceError::StoreError(_) | ServiceError::ConfigError(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	/// Text placed in the `detail` field of the error body.
	pub fn detail(&self) -> String {
		match self {
			ServiceError::ValidationError(detail) => detail.clone(),
			ServiceError::PostNotFound => POST_NOT_FOUND.to_string(),
			ServiceError::RouteNotFound => "Not Found".to_string(),
			ServiceError::MethodNotAllowed => "Method Not Allowed".to_string(),
			ServiceError::InternalError(description) => format!("Error Occurred: {}", description),
			ServiceError::StoreError(_) | ServiceError::ConfigError(_) => "Internal Server Error".to_string(),
		}
	}
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::ValidationError(res) => write!(f, "ValidationError: {}", res),
			ServiceError::PostNotFound => write!(f, "PostNotFound"),
			ServiceError::RouteNotFound => write!(f, "RouteNotFound"),
			ServiceError::MethodNotAllowed => write!(f, "MethodNotAllowed"),
			ServiceError::InternalError(res) => write!(f, "InternalError: {}", res),
			ServiceError::StoreError(res) => write!(f, "StoreError: {}", res),
			ServiceError::ConfigError(res) => write!(f, "ConfigError: {}", res),
		}
	}
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
	pub detail: String,
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		if let ServiceError::StoreError(res) | ServiceError::ConfigError(res) = &self {
			tracing::error!("Unhandled failure while serving request :{:?}", res);
		}
		(self.status(), Json(ErrorBody { detail: self.detail() })).into_response()
	}
}
