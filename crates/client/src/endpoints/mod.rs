//! REST API endpoint implementations.
//!
//! Each resource family exposes free functions that build the route URL,
//! dispatch one HTTP request and wrap the `response` payload in the
//! family's success or error model.

mod layers;
mod locations;
mod mapsets;
mod modules;
mod request;
pub mod url_encoding;

pub use layers::{
    RenderOptions, create_raster, delete_raster, delete_rasters, get_raster_colors,
    get_raster_info, get_vector_info, list_rasters, list_vectors, rename_rasters, render_geotiff,
    render_raster, render_vector,
};
pub use locations::{create_location, delete_location, get_location_info, list_locations};
pub use mapsets::{
    create_mapset, create_mapset_lock, delete_mapset, delete_mapset_lock, get_mapset_info,
    get_mapset_lock, list_mapsets,
};
pub use modules::{MODULE_FAMILIES, get_module, list_modules};
pub use request::{ApiResponse, RequestBody, dispatch};
pub use url_encoding::encode_path_segment;

use crate::error::{ClientError, Result};
use reqwest::Url;

/// Join the API base URL with percent-encoded path segments under the
/// `/g` mount of the geoprocessing API.
pub(crate) fn api_url(base_url: &str, segments: &[&str]) -> Result<Url> {
    let mut url = format!("{}/g", base_url.trim_end_matches('/'));
    for segment in segments {
        url.push('/');
        url.push_str(&encode_path_segment(segment));
    }
    Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{url}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_segments() {
        let url = api_url("http://localhost:8005/savana", &["locations", "nc_spm_08", "info"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8005/savana/g/locations/nc_spm_08/info"
        );
    }

    #[test]
    fn test_api_url_trims_trailing_slash_and_encodes() {
        let url = api_url("http://localhost:8005/savana/", &["locations", "my location"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8005/savana/g/locations/my%20location"
        );
    }
}
