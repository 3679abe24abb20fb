//! Raster and vector layer payloads.

use crate::models::enums::RequestStatus;
use crate::serde_helpers::opt_string_from_any;
use serde::{Deserialize, Serialize};

/// Rendered raster image: the raster's name plus base64-encoded PNG data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagePngResponse {
    pub raster_name: String,
    pub imagedata: String,
}

impl ImagePngResponse {
    /// Data URL for the base64 PNG payload, usable as an `<img>` source.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.imagedata)
    }
}

/// Descriptive raster metadata, as reported by `r.info`.
///
/// The server emits these as strings or numbers depending on the field
/// and version; everything is normalized to optional strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RasterInfo {
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub cells: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub cols: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub database: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub datatype: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub maptype: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub east: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub ewres: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub max: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub min: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub ncats: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub nsres: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub map: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub mapset: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub rows: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub source1: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub north: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub source2: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub units: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub vdatum: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub west: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_any")]
    pub semantic_label: Option<String>,
}

/// Response of `GET .../raster_layers/{raster}`: a process response whose
/// results carry the raster metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterInfoResponse {
    pub status: RequestStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_results: Option<RasterInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_png_data_url() {
        let image = ImagePngResponse {
            raster_name: "elevation".to_string(),
            imagedata: "iVBORw0KGgo=".to_string(),
        };
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_image_png_from_wire_names() {
        let parsed: ImagePngResponse = serde_json::from_str(
            r#"{"raster_name": "elevation", "imagedata": "AAAA"}"#,
        )
        .unwrap();
        assert_eq!(parsed.raster_name, "elevation");
    }

    #[test]
    fn test_raster_info_mixed_value_types() {
        let json = r#"{
            "cells": 2025000,
            "cols": "1500",
            "datatype": "FCELL",
            "ewres": 10.0,
            "map": "elevation",
            "mapset": "PERMANENT",
            "min": 55.57879,
            "max": 156.3299,
            "title": "South-West Wake county: Elevation NED 10m",
            "semantic_label": "none"
        }"#;
        let info: RasterInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.cells.as_deref(), Some("2025000"));
        assert_eq!(info.cols.as_deref(), Some("1500"));
        assert_eq!(info.datatype.as_deref(), Some("FCELL"));
        assert_eq!(info.map.as_deref(), Some("elevation"));
        assert!(info.comments.is_none());
    }

    #[test]
    fn test_raster_info_response() {
        let json = r#"{
            "status": "finished",
            "message": "Processing successfully finished",
            "process_results": {"map": "elevation", "datatype": "FCELL"},
            "user_id": "actinia-gdi"
        }"#;
        let response: RasterInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, RequestStatus::Finished);
        assert_eq!(
            response.process_results.unwrap().map.as_deref(),
            Some("elevation")
        );
    }
}
