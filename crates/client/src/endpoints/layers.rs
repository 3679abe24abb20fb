//! Raster and vector layer endpoints.
//!
//! All routes live under `/locations/{location}/mapsets/{mapset}`.
//! Raster uploads are the one place this client sends
//! `multipart/form-data`; multipart requests cannot be cloned, which is
//! irrelevant here since the dispatcher never retries.

use actinia_config::AuthConfig;
use reqwest::{Client, Method};

use crate::endpoints::request::{ApiResponse, RequestBody, dispatch};
use crate::error::Result;
use crate::models::{ImagePngResponse, ProcessResponse, RasterInfoResponse};
use crate::strings::error_context;

/// Rendering options for raster/vector render routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl RenderOptions {
    fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(width) = self.width {
            query.push(("width", width.to_string()));
        }
        if let Some(height) = self.height {
            query.push(("height", height.to_string()));
        }
        query
    }
}

/// List raster layers of a mapset, optionally filtered by a search
/// pattern.
pub async fn list_rasters(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    pattern: Option<&str>,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &["locations", location, "mapsets", mapset, "raster_layers"],
    )?;
    let query: Vec<(&str, String)> = pattern
        .map(|p| vec![("pattern", p.to_string())])
        .unwrap_or_default();
    dispatch(
        client,
        Method::GET,
        url,
        &query,
        auth,
        None,
        error_context("layer", "list_rasters", language),
    )
    .await
}

/// Rename a batch of raster layers. Each pair is `(from, to)`.
pub async fn rename_rasters(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    renames: &[(&str, &str)],
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &["locations", location, "mapsets", mapset, "raster_layers"],
    )?;
    let rename_list: Vec<[&str; 2]> = renames.iter().map(|(from, to)| [*from, *to]).collect();
    dispatch(
        client,
        Method::PUT,
        url,
        &[],
        auth,
        Some(RequestBody::Json(
            serde_json::json!({ "rename_list": rename_list }),
        )),
        error_context("layer", "rename_rasters", language),
    )
    .await
}

/// Delete all raster layers of a mapset matching a pattern, or every
/// raster layer when no pattern is given.
pub async fn delete_rasters(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    pattern: Option<&str>,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &["locations", location, "mapsets", mapset, "raster_layers"],
    )?;
    let query: Vec<(&str, String)> = pattern
        .map(|p| vec![("pattern", p.to_string())])
        .unwrap_or_default();
    dispatch(
        client,
        Method::DELETE,
        url,
        &query,
        auth,
        None,
        error_context("layer", "delete_rasters", language),
    )
    .await
}

/// Fetch `r.info` metadata for a single raster layer.
pub async fn get_raster_info(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
) -> Result<ApiResponse<RasterInfoResponse, RasterInfoResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("layer", "get_raster", language),
    )
    .await
}

/// Create a raster layer by uploading GeoTIFF bytes.
pub async fn create_raster(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
    data: Vec<u8>,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
        ],
    )?;
    let form = reqwest::multipart::Form::new().part(
        "file",
        reqwest::multipart::Part::bytes(data)
            .file_name(format!("{raster}.tif"))
            .mime_str("image/tiff")
            .map_err(crate::error::ClientError::Http)?,
    );
    dispatch(
        client,
        Method::POST,
        url,
        &[],
        auth,
        Some(RequestBody::Multipart(form)),
        error_context("layer", "create_raster", language),
    )
    .await
}

/// Delete a single raster layer.
pub async fn delete_raster(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
        ],
    )?;
    dispatch(
        client,
        Method::DELETE,
        url,
        &[],
        auth,
        None,
        error_context("layer", "delete_raster", language),
    )
    .await
}

/// Render a raster layer to a base64 PNG.
pub async fn render_raster(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
    options: RenderOptions,
) -> Result<ApiResponse<ImagePngResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
            "render",
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &options.to_query(),
        auth,
        None,
        error_context("layer", "render_raster", language),
    )
    .await
}

/// Kick off an asynchronous GeoTIFF export of a raster layer.
pub async fn render_geotiff(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
            "geotiff_async_orig",
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("layer", "render_geotiff", language),
    )
    .await
}

/// Fetch the color table of a raster layer.
pub async fn get_raster_colors(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    raster: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "raster_layers",
            raster,
            "colors",
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("layer", "raster_colors", language),
    )
    .await
}

/// List vector layers of a mapset.
pub async fn list_vectors(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &["locations", location, "mapsets", mapset, "vector_layers"],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("layer", "list_vectors", language),
    )
    .await
}

/// Fetch `v.info` metadata for a single vector layer.
pub async fn get_vector_info(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    vector: &str,
) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "vector_layers",
            vector,
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("layer", "get_vector", language),
    )
    .await
}

/// Render a vector layer to a base64 PNG.
pub async fn render_vector(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    location: &str,
    mapset: &str,
    vector: &str,
    options: RenderOptions,
) -> Result<ApiResponse<ImagePngResponse, ProcessResponse>> {
    let url = super::api_url(
        base_url,
        &[
            "locations",
            location,
            "mapsets",
            mapset,
            "vector_layers",
            vector,
            "render",
        ],
    )?;
    dispatch(
        client,
        Method::GET,
        url,
        &options.to_query(),
        auth,
        None,
        error_context("layer", "render_vector", language),
    )
    .await
}
