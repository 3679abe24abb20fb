//! Raster and vector layer API methods for [`ActiniaClient`].

use crate::client::ActiniaClient;
use crate::endpoints::{self, ApiResponse, RenderOptions};
use crate::error::Result;
use crate::models::{ImagePngResponse, ProcessResponse, RasterInfoResponse};

impl ActiniaClient {
    /// List raster layers of a mapset, optionally filtered by a search
    /// pattern.
    pub async fn list_rasters(
        &self,
        location: &str,
        mapset: &str,
        pattern: Option<&str>,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::list_rasters(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            pattern,
        )
        .await
    }

    /// Rename a batch of raster layers. Each pair is `(from, to)`.
    pub async fn rename_rasters(
        &self,
        location: &str,
        mapset: &str,
        renames: &[(&str, &str)],
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::rename_rasters(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            renames,
        )
        .await
    }

    /// Delete raster layers matching a pattern, or all of them.
    pub async fn delete_rasters(
        &self,
        location: &str,
        mapset: &str,
        pattern: Option<&str>,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::delete_rasters(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            pattern,
        )
        .await
    }

    /// Fetch `r.info` metadata for a single raster layer.
    pub async fn get_raster_info(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
    ) -> Result<ApiResponse<RasterInfoResponse, RasterInfoResponse>> {
        endpoints::get_raster_info(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
        )
        .await
    }

    /// Create a raster layer by uploading GeoTIFF bytes.
    pub async fn create_raster(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
        data: Vec<u8>,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::create_raster(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
            data,
        )
        .await
    }

    /// Delete a single raster layer.
    pub async fn delete_raster(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::delete_raster(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
        )
        .await
    }

    /// Render a raster layer to a base64 PNG.
    pub async fn render_raster(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
        options: RenderOptions,
    ) -> Result<ApiResponse<ImagePngResponse, ProcessResponse>> {
        endpoints::render_raster(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
            options,
        )
        .await
    }

    /// Kick off an asynchronous GeoTIFF export of a raster layer.
    pub async fn render_geotiff(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::render_geotiff(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
        )
        .await
    }

    /// Fetch the color table of a raster layer.
    pub async fn get_raster_colors(
        &self,
        location: &str,
        mapset: &str,
        raster: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::get_raster_colors(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            raster,
        )
        .await
    }

    /// List vector layers of a mapset.
    pub async fn list_vectors(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::list_vectors(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Fetch `v.info` metadata for a single vector layer.
    pub async fn get_vector_info(
        &self,
        location: &str,
        mapset: &str,
        vector: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::get_vector_info(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            vector,
        )
        .await
    }

    /// Render a vector layer to a base64 PNG.
    pub async fn render_vector(
        &self,
        location: &str,
        mapset: &str,
        vector: &str,
        options: RenderOptions,
    ) -> Result<ApiResponse<ImagePngResponse, ProcessResponse>> {
        endpoints::render_vector(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
            vector,
            options,
        )
        .await
    }
}
