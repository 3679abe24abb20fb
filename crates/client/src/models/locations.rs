//! Location listing payloads.

use crate::models::enums::RequestStatus;
use serde::{Deserialize, Serialize};

/// Response of `GET /locations`: the location names visible to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationListResponse {
    pub status: RequestStatus,
    #[serde(default)]
    pub locations: Vec<String>,
}
