//! Minimal status/message response payloads.

use crate::models::enums::RequestStatus;
use serde::{Deserialize, Serialize};

/// The standard error payload: a validated status plus a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleResponse {
    pub status: RequestStatus,
    #[serde(default)]
    pub message: String,
}

/// Status/message payload carrying the numeric HTTP code instead of a
/// request-status token. Used by the modules family error path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleStatusCodeResponse {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}
