//! Location management API methods for [`ActiniaClient`].

use crate::client::ActiniaClient;
use crate::endpoints::{self, ApiResponse};
use crate::error::Result;
use crate::models::{LocationListResponse, ProcessResponse, SimpleResponse};

impl ActiniaClient {
    /// List the location names visible to the user.
    pub async fn list_locations(
        &self,
    ) -> Result<ApiResponse<LocationListResponse, SimpleResponse>> {
        endpoints::list_locations(&self.http, &self.base_url, &self.auth, &self.language).await
    }

    /// Fetch region and projection information for a location.
    pub async fn get_location_info(
        &self,
        location: &str,
    ) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
        endpoints::get_location_info(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
        )
        .await
    }

    /// Create a new location from an EPSG code.
    pub async fn create_location(
        &self,
        location: &str,
        epsg: u32,
    ) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
        endpoints::create_location(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
            epsg,
        )
        .await
    }

    /// Delete an existing location and everything in it.
    pub async fn delete_location(
        &self,
        location: &str,
    ) -> Result<ApiResponse<ProcessResponse, SimpleResponse>> {
        endpoints::delete_location(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            location,
        )
        .await
    }
}
