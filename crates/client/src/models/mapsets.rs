//! Mapset information payloads.

use crate::models::enums::RequestStatus;
use crate::models::process::{ProgressInfo, UrlInfo};
use serde::{Deserialize, Serialize};

/// Computational region of a mapset, as reported by `g.region -g`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Region {
    pub n: f64,
    pub s: f64,
    pub e: f64,
    pub w: f64,
    #[serde(default)]
    pub t: f64,
    #[serde(default)]
    pub b: f64,
    pub nsres: f64,
    #[serde(default)]
    pub nsres3: f64,
    pub ewres: f64,
    #[serde(default)]
    pub ewres3: f64,
    #[serde(default)]
    pub tbres: f64,
    pub rows: u64,
    #[serde(default)]
    pub rows3: u64,
    pub cols: u64,
    #[serde(default)]
    pub cols3: u64,
    #[serde(default)]
    pub depths: u64,
    pub cells: u64,
    #[serde(default)]
    pub cells3: u64,
    #[serde(default)]
    pub projection: u64,
    #[serde(default)]
    pub zone: u64,
}

/// Region and projection of a mapset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsetInfo {
    pub projection: String,
    pub region: Region,
}

/// Response of `GET /locations/{location}/mapsets/{mapset}/info`.
///
/// Shaped like a process response with the results typed as
/// [`MapsetInfo`]; only the fields callers read are mapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsetInfoResponse {
    pub status: RequestStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_results: Option<MapsetInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<UrlInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapset_info_response_with_region() {
        let json = r#"{
            "status": "finished",
            "message": "Processing successfully finished",
            "process_results": {
                "projection": "PROJCRS[\"NAD83(HARN) / North Carolina\"]",
                "region": {
                    "b": 0.0,
                    "cells": 29535,
                    "cells3": 29535,
                    "cols": 179,
                    "cols3": 179,
                    "depths": 1,
                    "e": 639530.0,
                    "ewres": 10.0,
                    "ewres3": 10.0,
                    "n": 221230.0,
                    "nsres": 10.0,
                    "nsres3": 10.0,
                    "projection": 99,
                    "rows": 165,
                    "rows3": 165,
                    "s": 219580.0,
                    "t": 1.0,
                    "tbres": 1.0,
                    "w": 637740.0,
                    "zone": 0
                }
            },
            "resource_id": "resource_id-5f36b994",
            "user_id": "actinia-gdi"
        }"#;
        let response: MapsetInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, RequestStatus::Finished);
        let info = response.process_results.unwrap();
        assert!(info.projection.starts_with("PROJCRS"));
        assert_eq!(info.region.cells, 29535);
        assert_eq!(info.region.nsres, 10.0);
        assert_eq!(info.region.rows, 165);
    }

    #[test]
    fn test_mapset_info_response_without_results() {
        let response: MapsetInfoResponse =
            serde_json::from_str(r#"{"status": "error", "message": "mapset does not exist"}"#)
                .unwrap();
        assert_eq!(response.status, RequestStatus::Error);
        assert!(response.process_results.is_none());
    }
}
