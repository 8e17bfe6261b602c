use reqwasm::http::{Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::model::error::ApiError, model::api::ErrorDto};

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url).credentials(RequestCredentials::Include)
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// PUT with a JSON body.
pub fn put_json<T: Serialize>(url: &str, payload: &T) -> Result<Request, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })?;

    Ok(Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(body))
}

/// Sends the request and decodes a JSON success body.
pub async fn fetch_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = send(request).await?;

    if !is_success(&response) {
        return Err(read_error(response).await);
    }

    response.json::<T>().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to parse response: {}", e),
    })
}

/// Sends the request and expects a success status with no body of interest.
pub async fn fetch_empty(request: Request) -> Result<(), ApiError> {
    let response = send(request).await?;

    if !is_success(&response) {
        return Err(read_error(response).await);
    }

    Ok(())
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

fn is_success(response: &Response) -> bool {
    (200..300).contains(&response.status())
}

/// Builds an `ApiError` from the `{error}` body, falling back to the raw text.
async fn read_error(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorDto>(&text)
            .map(|dto| dto.error)
            .unwrap_or(text),
        Err(_) => "Unknown error".to_string(),
    };

    ApiError { status, message }
}

/// Percent-encodes a query or path value.
pub fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
