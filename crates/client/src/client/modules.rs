//! Module catalog API methods for [`ActiniaClient`].

use crate::client::ActiniaClient;
use crate::endpoints::{self, ApiResponse};
use crate::error::Result;
use crate::models::{Module, ModuleListResponse, SimpleStatusCodeResponse};

impl ActiniaClient {
    /// List the modules known to the server, optionally restricted to
    /// one GRASS family prefix (see [`endpoints::MODULE_FAMILIES`]).
    pub async fn list_modules(
        &self,
        family: Option<&str>,
    ) -> Result<ApiResponse<ModuleListResponse, SimpleStatusCodeResponse>> {
        endpoints::list_modules(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            family,
        )
        .await
    }

    /// Fetch the full self-description of a single module.
    pub async fn get_module(
        &self,
        module_id: &str,
    ) -> Result<ApiResponse<Module, SimpleStatusCodeResponse>> {
        endpoints::get_module(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.language,
            module_id,
        )
        .await
    }
}
