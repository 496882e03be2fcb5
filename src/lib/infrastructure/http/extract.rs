//! Request body extraction

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// Extracts `T` from a JSON or url-encoded form body.
///
/// Requests carrying any other content type deserialize to
/// `T::default()`, so field-presence checks stay with the handler.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(body));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<T>::from_request(req, state).await?;
            return Ok(Self(body));
        }

        Ok(Self(T::default()))
    }
}
