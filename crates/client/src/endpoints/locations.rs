//! Location management endpoints.

use actinia_config::AuthConfig;
use reqwest::{Client, Method};

use crate::endpoints::request::{ApiResponse, RequestBody, dispatch};
use crate::error::Result;
use crate::models::{LocationListResponse, ProcessResponse, SimpleResponse};
use crate::strings::error_context;

/// List the location names visible to the user.
pub async fn list_locations(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
) -> Result<ApiResponse<LocationListResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("location", "list", language),
    )
    .await
}

/// Fetch region and projection information for a location.
pub async fn get_location_info(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location, "info"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("location", "info", language),
    )
    .await
}

/// Create a new location from an EPSG code.
pub async fn create_location(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    epsg: u32,
) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location])?;
    dispatch(
        client,
        Method::POST,
        url,
        &[],
        auth,
        Some(RequestBody::Json(serde_json::json!({ "epsg": epsg }))),
        error_context("location", "create", language),
    )
    .await
}

/// Delete an existing location and everything in it.
pub async fn delete_location(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location])?;
    dispatch(
        client,
        Method::DELETE,
        url,
        &[],
        auth,
        None,
        error_context("location", "delete", language),
    )
    .await
}
