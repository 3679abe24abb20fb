//! The process response: the richest payload the API returns.
//!
//! Asynchronous and synchronous processing endpoints alike answer with
//! this shape. The process log mirrors the submitted process chain 1:1
//! and in order, one entry per executed step.

use crate::models::enums::RequestStatus;
use crate::serde_helpers;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata about the REST call that produced a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub endpoint: String,
    pub method: String,
    pub path: String,
    pub request_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
}

/// One module invocation inside a submitted process chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCall {
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Input assignments; shape varies per module, kept free-form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<serde_json::Value>,
}

/// Execution record of a single process-chain step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessLogEntry {
    pub executable: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_string_from_any")]
    pub id: Option<String>,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<String>,
    pub return_code: i32,
    pub run_time: f64,
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: Vec<String>,
}

/// Step counters of a running or finished request.
///
/// Counters the server has not reached yet are simply missing from the
/// payload and default to 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProgressInfo {
    #[serde(default)]
    pub step: u64,
    #[serde(default)]
    pub num_of_steps: u64,
    #[serde(default)]
    pub sub_step: u64,
    #[serde(default)]
    pub num_of_sub_steps: u64,
}

/// Resource and status URLs attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlInfo {
    #[serde(default)]
    pub resources: Vec<String>,
    pub status: String,
}

/// Server-side exception report for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionTraceback {
    pub message: String,
    #[serde(default)]
    pub traceback: Vec<String>,
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Full processing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub status: RequestStatus,
    pub message: String,
    #[serde(deserialize_with = "serde_helpers::naive_datetime_from_str")]
    pub accept_datetime: NaiveDateTime,
    pub accept_timestamp: f64,
    #[serde(deserialize_with = "serde_helpers::naive_datetime_from_str")]
    pub datetime: NaiveDateTime,
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_info: Option<ApiInfo>,
    /// Submitted chain: one map per sub-chain, keyed by step number.
    #[serde(default)]
    pub process_chain_list: Vec<BTreeMap<String, ModuleCall>>,
    #[serde(default)]
    pub process_log: Vec<ProcessLogEntry>,
    /// Module output; shape depends entirely on the executed modules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_results: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressInfo>,
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<UrlInfo>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<ExceptionTraceback>,
}

impl ProcessResponse {
    /// Log entries for a given executable, in execution order.
    pub fn filter_executables(&self, executable: &str) -> Vec<&ProcessLogEntry> {
        self.process_log
            .iter()
            .filter(|entry| entry.executable == executable)
            .collect()
    }
}
