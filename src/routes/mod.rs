use axum::{
	extract::State,
	http::StatusCode,
	response::IntoResponse,
	routing::{get, post},
	Json, Router,
};
use axum_macros::debug_handler;
use serde_json::json;

use crate::{
	common::extractors::{ValidatedJson, ValidatedPath},
	dependencies::PostState,
	domain::post::{CommentIn, UserPostIn},
	services::{handlers::PostHandler, response::ServiceError},
};

pub(crate) async fn index() -> impl IntoResponse {
	Json(json!({ "message": "Hello World" }))
}

pub(crate) async fn route_not_found() -> ServiceError {
	ServiceError::RouteNotFound
}

pub(crate) async fn method_not_allowed() -> ServiceError {
	ServiceError::MethodNotAllowed
}

#[debug_handler]
async fn create_post_route(
	State(state): State<PostState>,
	ValidatedJson(post): ValidatedJson<UserPostIn>,
) -> Result<impl IntoResponse, ServiceError> {
	let post = PostHandler::create_post(post, &state).await?;
	Ok((StatusCode::CREATED, Json(post)))
}

#[debug_handler]
async fn create_comment_route(
	State(state): State<PostState>,
	ValidatedJson(comment): ValidatedJson<CommentIn>,
) -> Result<impl IntoResponse, ServiceError> {
	let comment = PostHandler::create_comment(comment, &state).await?;
	Ok((StatusCode::CREATED, Json(comment)))
}

async fn list_comments_route(
	State(state): State<PostState>,
	ValidatedPath(post_id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	Ok(Json(PostHandler::list_comments(post_id, &state).await?))
}

async fn get_post_with_comments_route(
	State(state): State<PostState>,
	ValidatedPath(post_id): ValidatedPath<i64>,
) -> Result<impl IntoResponse, ServiceError> {
	Ok(Json(PostHandler::get_post_with_comments(post_id, &state).await?))
}

async fn list_posts_route(State(state): State<PostState>) -> Result<impl IntoResponse, ServiceError> {
	Ok(Json(PostHandler::list_posts(&state).await?))
}

pub fn post_routers() -> Router<PostState> {
	Router::new()
		.route("/", get(index).fallback(method_not_allowed))
		.route("/post", post(create_post_route).fallback(method_not_allowed))
		.route("/comment", post(create_comment_route).fallback(method_not_allowed))
		.route("/post/:post_id/comment", get(list_comments_route).fallback(method_not_allowed))
		.route("/post/:post_id", get(get_post_with_comments_route).fallback(method_not_allowed))
		.route("/get-posts", get(list_posts_route).fallback(method_not_allowed))
}

#[cfg(test)]
mod test {
	use axum::{
		body::Body,
		http::{Request, StatusCode},
		Router,
	};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	use crate::{create_app, dependencies::PostState};

	fn app() -> Router {
		create_app(PostState::in_memory(), "/postapi")
	}

	async fn send(
		app: &Router,
		method: &str,
		uri: &str,
		body: Option<Value>,
	) -> (StatusCode, Value) {
		let request = Request::builder().method(method).uri(uri);
		let request = match body {
			Some(body) => request
				.header("content-type", "application/json")
				.body(Body::from(body.to_string()))
				.unwrap(),
			None => request.body(Body::empty()).unwrap(),
		};

		let response = app.clone().oneshot(request).await.unwrap();
		let status = response.status();
		let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
		let value = if bytes.is_empty() {
			Value::Null
		} else {
			serde_json::from_slice(&bytes).unwrap()
		};
		(status, value)
	}

	async fn create_post(
		app: &Router,
		body: &str,
	) -> Value {
		send(app, "POST", "/postapi/post", Some(json!({ "body": body }))).await.1
	}

	async fn create_comment(
		app: &Router,
		body: &str,
		post_id: i64,
	) -> Value {
		send(app, "POST", "/postapi/comment", Some(json!({ "body": body, "post_id": post_id })))
			.await
			.1
	}

	#[tokio::test]
	async fn test_root_says_hello() {
		let app = app();
		let (status, body) = send(&app, "GET", "/postapi", None).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "Hello World" }));
	}

	#[tokio::test]
	async fn test_root_says_hello_with_trailing_slash() {
		let app = app();
		let (status, body) = send(&app, "GET", "/postapi/", None).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!({ "message": "Hello World" }));
	}

	#[tokio::test]
	async fn test_unknown_path_has_detail() {
		'_given: {
			let app = app();

			'_when: {
				let (status, body) = send(&app, "GET", "/nope", None).await;
				assert_eq!(status, StatusCode::NOT_FOUND);
				assert_eq!(body, json!({ "detail": "Not Found" }));

				let (status, body) = send(&app, "GET", "/postapi/nope", None).await;
				assert_eq!(status, StatusCode::NOT_FOUND);
				assert_eq!(body, json!({ "detail": "Not Found" }));
			}
		}
	}

	#[tokio::test]
	async fn test_wrong_method_has_detail() {
		'_given: {
			let app = app();

			'_when: {
				let (status, body) = send(&app, "GET", "/postapi/comment", None).await;
				assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
				assert_eq!(body, json!({ "detail": "Method Not Allowed" }));

				let (status, body) = send(&app, "DELETE", "/postapi/post/0", None).await;
				assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
				assert_eq!(body, json!({ "detail": "Method Not Allowed" }));
			}
		}
	}

	#[tokio::test]
	async fn test_create_post() {
		let app = app();
		let (status, body) = send(&app, "POST", "/postapi/post", Some(json!({ "body": "Test Post" }))).await;

		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(body, json!({ "id": 0, "body": "Test Post" }));
	}

	#[tokio::test]
	async fn test_create_post_422() {
		'_given: {
			let app = app();

			'_when: {
				let (status, body) = send(&app, "POST", "/postapi/post", Some(json!({}))).await;
				assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
				assert!(body["detail"].is_string());

				let (status, _) = send(&app, "POST", "/postapi/post", Some(json!({ "body": "" }))).await;
				assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
			}

			let (_, posts) = send(&app, "GET", "/postapi/get-posts", None).await;
			assert_eq!(posts, json!([]));
		}
	}

	#[tokio::test]
	async fn test_get_posts() {
		let app = app();
		let created = create_post(&app, "Test Post").await;

		let (status, body) = send(&app, "GET", "/postapi/get-posts", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([created]));
	}

	#[tokio::test]
	async fn test_create_comment() {
		let app = app();
		let post = create_post(&app, "Test Post").await;

		let (status, body) = send(
			&app,
			"POST",
			"/postapi/comment",
			Some(json!({ "body": "Test Comment", "post_id": post["id"] })),
		)
		.await;

		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(body, json!({ "id": 0, "body": "Test Comment", "post_id": 0 }));
	}

	#[tokio::test]
	async fn test_create_comment_on_missing_post() {
		'_given: {
			let app = app();

			'_when: {
				let (status, body) = send(
					&app,
					"POST",
					"/postapi/comment",
					Some(json!({ "body": "Test Comment", "post_id": 3 })),
				)
				.await;
				assert_eq!(status, StatusCode::NOT_FOUND);
				assert_eq!(body, json!({ "detail": "Post Not Found" }));
			}

			// the rejected comment did not take id 0
			create_post(&app, "Test Post").await;
			let comment = create_comment(&app, "Test Comment", 0).await;
			assert_eq!(comment["id"], 0);
		}
	}

	#[tokio::test]
	async fn test_create_comment_with_bad_post_id_422() {
		let app = app();
		create_post(&app, "Test Post").await;

		let (status, _) = send(
			&app,
			"POST",
			"/postapi/comment",
			Some(json!({ "body": "Test Comment", "post_id": "zero" })),
		)
		.await;
		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[tokio::test]
	async fn test_get_comment_success() {
		let app = app();
		let post = create_post(&app, "Test Post").await;
		let comment = create_comment(&app, "Test Comment", 0).await;

		let (status, body) = send(&app, "GET", &format!("/postapi/post/{}/comment", post["id"]), None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([comment]));
	}

	#[tokio::test]
	async fn test_get_comment_empty() {
		let app = app();
		let post = create_post(&app, "Test Post").await;

		let (status, body) = send(&app, "GET", &format!("/postapi/post/{}/comment", post["id"]), None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));

		let (status, body) = send(&app, "GET", "/postapi/post/99/comment", None).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, json!([]));
	}

	#[tokio::test]
	async fn test_get_post_with_comment() {
		'_given: {
			let app = app();
			let post = create_post(&app, "Test Post").await;
			let comment = create_comment(&app, "Test Comment", 0).await;

			'_when: {
				let (status, body) = send(&app, "GET", "/postapi/post/0", None).await;
				assert_eq!(status, StatusCode::OK);
				assert_eq!(body, json!({ "post": post, "comments": [comment] }));
				assert_eq!(
					body,
					json!({
						"post": { "id": 0, "body": "Test Post" },
						"comments": [{ "id": 0, "body": "Test Comment", "post_id": 0 }]
					})
				);
			}
		}
	}

	#[tokio::test]
	async fn test_get_missing_post_with_comment() {
		let app = app();
		create_post(&app, "Test Post").await;
		create_comment(&app, "Test Comment", 0).await;

		let (status, body) = send(&app, "GET", "/postapi/post/2", None).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body, json!({ "detail": "Post Not Found" }));
	}

	#[tokio::test]
	async fn test_non_integer_path_is_422() {
		let app = app();
		let (status, body) = send(&app, "GET", "/postapi/post/abc", None).await;

		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert!(body["detail"].is_string());
	}

	#[tokio::test]
	async fn test_routes_mount_at_root_without_prefix() {
		let app = create_app(PostState::in_memory(), "/");
		let (status, body) = send(&app, "POST", "/post", Some(json!({ "body": "Test Post" }))).await;

		assert_eq!(status, StatusCode::CREATED);
		assert_eq!(body["id"], 0);
	}
}
