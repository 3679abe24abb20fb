//! Mapset management API methods for [`ActiniaClient`].

use crate::client::ActiniaClient;
use crate::endpoints::{self, ApiResponse};
use crate::error::Result;
use crate::models::{MapsetInfoResponse, ProcessResponse, SimpleResponse};

impl ActiniaClient {
    /// List all mapsets of a location.
    pub async fn list_mapsets(
        &self,
        location: &str,
    ) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
        endpoints::list_mapsets(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
        )
        .await
    }

    /// Current computational region of the mapset and projection of the
    /// location.
    pub async fn get_mapset_info(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<MapsetInfoResponse, SimpleResponse>> {
        endpoints::get_mapset_info(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Create a new mapset in an existing location.
    pub async fn create_mapset(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
        endpoints::create_mapset(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Delete an existing mapset.
    pub async fn delete_mapset(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::delete_mapset(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Get the mapset lock status.
    pub async fn get_mapset_lock(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::get_mapset_lock(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Lock a mapset so no operation can be performed on it until
    /// unlocked.
    pub async fn create_mapset_lock(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::create_mapset_lock(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }

    /// Remove a mapset lock.
    pub async fn delete_mapset_lock(
        &self,
        location: &str,
        mapset: &str,
    ) -> Result<ApiResponse<ProcessResponse, ProcessResponse>> {
        endpoints::delete_mapset_lock(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            mapset,
        )
        .await
    }
}
