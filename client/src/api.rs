use seed::browser::fetch::{FetchError, Header, Method, Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::api::{self as paths, ErrorBody, LoginRequest, LoginResponse, ReviewRequest};
use shared::page::encode_id;
use shared::Place;

use crate::config::endpoint;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::JsonError(error) => ApiError::Decode(format!("{:?}", error)),
            other => ApiError::Network(format!("{:?}", other)),
        }
    }
}

fn authorized(request: Request<'static>, token: Option<&str>) -> Request<'static> {
    match token {
        Some(token) => request.header(Header::bearer(token.to_string())),
        None => request,
    }
}

/// Sends the request and turns a non-2xx answer into `ApiError::Rejected`,
/// using the server's own text when it sent one.
async fn send(request: Request<'static>, fallback: &'static str) -> Result<Response, ApiError> {
    let response = request.fetch().await?;
    let status = response.status();
    if status.is_ok() {
        return Ok(response);
    }
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.code,
        message: body.into_message(fallback),
    })
}

async fn decode<T: DeserializeOwned + 'static>(response: Response) -> Result<T, ApiError> {
    Ok(response.json::<T>().await?)
}

pub async fn login(credentials: LoginRequest) -> Result<LoginResponse, ApiError> {
    let request = Request::new(endpoint(paths::LOGIN))
        .method(Method::Post)
        .json(&credentials)?;
    decode(send(request, "Login failed.").await?).await
}

pub async fn list_places(token: Option<String>) -> Result<Vec<Place>, ApiError> {
    let request = authorized(Request::new(endpoint(paths::PLACES)), token.as_deref());
    decode(send(request, "Could not load places.").await?).await
}

pub async fn get_place(token: Option<String>, id: String) -> Result<Place, ApiError> {
    let request = authorized(
        Request::new(endpoint(&paths::place(&encode_id(&id)))),
        token.as_deref(),
    );
    decode(send(request, "Failed to fetch place details").await?).await
}

pub async fn submit_review(token: String, review: ReviewRequest) -> Result<(), ApiError> {
    let request = authorized(
        Request::new(endpoint(paths::REVIEWS))
            .method(Method::Post)
            .json(&review)?,
        Some(&token),
    );
    send(request, "Failed to submit review.").await?;
    Ok(())
}
