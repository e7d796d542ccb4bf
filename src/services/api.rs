//! Shared HTTP plumbing: one fetch-backed client, two base URLs and the
//! bearer-token interceptor every domain request goes through.

use std::sync::OnceLock;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::errors::ApiError;
use crate::services::auth;

/// Domain API base URL, resolved at build time (Trunk injects the env vars).
pub const API_URL: &str = match option_env!("FROTA_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Auth API base URL (token + account creation endpoints).
pub const AUTH_API_URL: &str = match option_env!("FROTA_AUTH_API_URL") {
    Some(url) => url,
    None => "http://localhost:8001",
};

static HTTP: OnceLock<Client> = OnceLock::new();

fn http() -> &'static Client {
    HTTP.get_or_init(Client::new)
}

fn domain_url(path: &str) -> String {
    format!("{API_URL}{path}")
}

fn auth_url(path: &str) -> String {
    format!("{AUTH_API_URL}{path}")
}

/// Attaches `Authorization: Bearer ...` when a token is stored.
fn with_bearer(request: RequestBuilder) -> RequestBuilder {
    match auth::stored_token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status_body(status.as_u16(), &body))
}

async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_bearer(http().get(domain_url(path))).send().await?;
    into_json(response).await
}

pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_bearer(http().post(domain_url(path)))
        .json(body)
        .send()
        .await?;
    into_json(response).await
}

/// POST whose response body the caller does not consume.
pub async fn post_unit<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = with_bearer(http().post(domain_url(path)))
        .json(body)
        .send()
        .await?;
    check_status(response).await.map(|_| ())
}

pub async fn put_unit<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = with_bearer(http().put(domain_url(path)))
        .json(body)
        .send()
        .await?;
    check_status(response).await.map(|_| ())
}

/// Body-less PUT used by the reservation lifecycle actions.
pub async fn put_action(path: &str) -> Result<(), ApiError> {
    let response = with_bearer(http().put(domain_url(path))).send().await?;
    check_status(response).await.map(|_| ())
}

pub async fn patch_unit<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = with_bearer(http().patch(domain_url(path)))
        .json(body)
        .send()
        .await?;
    check_status(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_bearer(http().delete(domain_url(path))).send().await?;
    check_status(response).await.map(|_| ())
}

/// Form-encoded POST against the auth API (the token endpoints).
pub async fn post_form_auth<T: DeserializeOwned>(
    path: &str,
    form: &[(&str, &str)],
) -> Result<T, ApiError> {
    let response = http().post(auth_url(path)).form(form).send().await?;
    into_json(response).await
}

/// JSON POST against the auth API (account creation), no bearer required.
pub async fn post_unit_auth<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = http().post(auth_url(path)).json(body).send().await?;
    check_status(response).await.map(|_| ())
}
