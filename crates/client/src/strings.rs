//! Localized error-context strings.
//!
//! Each route operation carries a human-readable context string that is
//! attached to transport errors for diagnostics. Strings are keyed by
//! resource family and operation; only English is populated today and
//! every other language code falls back to it. The strings never drive
//! control flow.

const GENERIC: &str = "The following error occurred during the request:";

/// Look up the error-context string for a route operation.
///
/// Unknown family/operation pairs return a generic context rather than
/// failing; the context is informational only.
pub fn error_context(family: &str, operation: &str, language: &str) -> &'static str {
    if language != "en" {
        tracing::debug!(language, "no localized strings, falling back to en");
    }
    match (family, operation) {
        ("location", "list") => "The following error occurred trying to access locations:",
        ("location", "info") => "The following error occurred trying to fetch your location:",
        ("location", "create") => "The following error occurred trying to create your location:",
        ("location", "delete") => "The following error occurred trying to delete your location:",
        ("mapset", "list") => "The following error occurred trying to access mapsets:",
        ("mapset", "info") => "The following error occurred trying to fetch your mapset:",
        ("mapset", "create") => "The following error occurred trying to create your mapset:",
        ("mapset", "delete") => "The following error occurred trying to delete your mapset:",
        ("mapset", "get_lock") => "The following error occurred trying to get a lock:",
        ("mapset", "create_lock") => "The following error occurred trying to create a lock:",
        ("mapset", "delete_lock") => "The following error occurred trying to delete a lock:",
        ("module", "list") => "The following error occurred trying to retrieve actinia modules:",
        ("module", "get") => "The following error occurred trying to retrieve the actinia module:",
        ("layer", "list_rasters") => "The following error occurred trying to access raster layers:",
        ("layer", "rename_rasters") => {
            "The following error occurred trying to rename raster layers:"
        }
        ("layer", "delete_rasters") => {
            "The following error occurred trying to delete raster layers:"
        }
        ("layer", "get_raster") => "The following error occurred trying to fetch the raster layer:",
        ("layer", "create_raster") => {
            "The following error occurred trying to create the raster layer:"
        }
        ("layer", "delete_raster") => {
            "The following error occurred trying to delete the raster layer:"
        }
        ("layer", "render_raster") => {
            "The following error occurred trying to render the raster layer:"
        }
        ("layer", "render_geotiff") => {
            "The following error occurred trying to export the raster layer:"
        }
        ("layer", "raster_colors") => {
            "The following error occurred trying to fetch the raster color table:"
        }
        ("layer", "list_vectors") => "The following error occurred trying to access vector layers:",
        ("layer", "get_vector") => "The following error occurred trying to fetch the vector layer:",
        ("layer", "render_vector") => {
            "The following error occurred trying to render the vector layer:"
        }
        _ => GENERIC,
    }
}
