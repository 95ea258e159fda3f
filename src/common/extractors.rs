use axum::{
	async_trait,
	extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path},
	http::{request::Parts, Request},
	Json,
};
use serde::de::DeserializeOwned;

use crate::{domain::post::Validate, services::response::ServiceError};

/// `Json<T>` that also runs [`Validate`] and reports every failure as a 422.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedJson<T>
where
	Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
	T: Validate + Send,
	S: Send + Sync,
	B: Send + 'static,
{
	type Rejection = ServiceError;

	async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
			tracing::warn!("Rejected request body :{}", rejection.body_text());
			ServiceError::ValidationError(rejection.body_text())
		})?;
		value.validate().map_err(|err| {
			tracing::warn!("Request body failed validation :{}", err);
			err
		})?;
		Ok(Self(value))
	}
}

/// `Path<T>` whose rejection is a 422 with a `detail` body instead of axum's plain-text 400.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
	T: DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = ServiceError;

	async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
		let Path(value) = Path::<T>::from_request_parts(parts, state)
			.await
			.map_err(|rejection| ServiceError::ValidationError(rejection.body_text()))?;
		Ok(Self(value))
	}
}
