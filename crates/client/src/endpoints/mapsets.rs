//! Mapset management endpoints.
//!
//! Mapsets live under a location; lock operations require an admin role
//! on the server side, which this layer does not check.

use actinia_config::AuthConfig;
use reqwest::{Client, Method};

use crate::endpoints::request::{ApiResponse, dispatch};
use crate::error::Result;
use crate::models::{MapsetInfoResponse, ProcessResponse, SimpleResponse};
use crate::strings::error_context;

/// List all mapsets of a location.
pub async fn list_mapsets(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "list", language),
    )
    .await
}

/// Current computational region of the mapset and projection of the
/// location.
pub async fn get_mapset_info(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<MapsetInfoResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset, "info"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "info", language),
    )
    .await
}

/// Create a new mapset in an existing location.
pub async fn create_mapset(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset])?;
    dispatch(
        client,
        Method::POST,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "create", language),
    )
    .await
}

/// Delete an existing mapset.
pub async fn delete_mapset(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset])?;
    dispatch(
        client,
        Method::DELETE,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "delete", language),
    )
    .await
}

/// Get the mapset lock status.
pub async fn get_mapset_lock(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset, "lock"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "get_lock", language),
    )
    .await
}

/// Lock a mapset so no operation can be performed on it until unlocked.
pub async fn create_mapset_lock(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset, "lock"])?;
    dispatch(
        client,
        Method::POST,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "create_lock", language),
    )
    .await
}

/// Remove a mapset lock.
pub async fn delete_mapset_lock(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(base_url, &["locations", location, "mapsets", mapset, "lock"])?;
    dispatch(
        client,
        Method::DELETE,
        url,
        &[],
        auth,
        None,
        error_context("mapset", "delete_lock", language),
    )
    .await
}
