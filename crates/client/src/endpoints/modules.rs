//! Module catalog endpoints.

use actinia_config::AuthConfig;
use reqwest::{Client, Method};

use crate::endpoints::request::{ApiResponse, dispatch};
use crate::error::{Result, ValidationError};
use crate::models::{Module, ModuleListResponse, SimpleStatusCodeResponse};
use crate::strings::error_context;

/// GRASS module family prefixes accepted by the `family` filter.
pub const MODULE_FAMILIES: [&str; 11] = [
    "d", "db", "g", "i", "m", "ps", "r", "r3", "t", "test", "v",
];

/// List the modules known to the server, optionally restricted to one
/// GRASS family prefix (e.g. `r` for raster modules).
pub async fn list_modules(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    family: Option<&str>,
) -> Result<ApiResponse<ModuleListResponse, SimpleStatusCodeResponse>> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(family) = family {
        if !MODULE_FAMILIES.contains(&family) {
            return Err(ValidationError::new("type", family).into());
        }
        query.push(("family", family.to_string()));
    }

    let url = super::api_url(base_url, &["modules"])?;
    dispatch(
        client,
        Method::GET,
        url,
        &query,
        auth,
        None,
        error_context("module", "list", language),
    )
    .await
}

/// Fetch the full self-description of a single module.
pub async fn get_module(
    client: &Client,
    base_url: &str,
    auth: &AuthConfig,
    language: &str,
    module_id: &str,
) -> Result<ApiResponse<Module, SimpleStatusCodeResponse>> {
    let url = super::api_url(base_url, &["modules", module_id])?;
    dispatch(
        client,
        Method::GET,
        url,
        &[],
        auth,
        None,
        error_context("module", "get", language),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_families_cover_grass_prefixes() {
        assert!(MODULE_FAMILIES.contains(&"r"));
        assert!(MODULE_FAMILIES.contains(&"v"));
        assert!(!MODULE_FAMILIES.contains(&"x"));
    }
}
