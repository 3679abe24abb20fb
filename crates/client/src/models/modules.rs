//! Module self-description payloads.
//!
//! A module is a named remote-invokable geoprocessing operation. Its
//! parameter schema carries enumerated type information that is
//! validated on construction; an unknown type token fails the whole
//! model instead of being carried along silently.

use crate::models::enums::{ParamSchemaSubType, ParamSchemaType, RequestStatus};
use crate::serde_helpers;
use serde::{Deserialize, Serialize};

/// Type description of a single module parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleParameterSchema {
    /// Base data type.
    #[serde(rename = "type")]
    pub data_type: ParamSchemaType,
    /// GRASS refinement of the base type; plain parameters omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<ParamSchemaSubType>,
    /// Legal values for dropdown-style parameters.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// A single declared parameter of a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleParameter {
    pub name: String,
    pub description: String,
    #[serde(default = "serde_helpers::default_true")]
    pub optional: bool,
    #[serde(
        rename = "default",
        default,
        deserialize_with = "serde_helpers::opt_string_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,
    pub schema: ModuleParameterSchema,
}

/// Self-description of a single geoprocessing module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ModuleParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Vec<ModuleParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_descr: Option<Vec<ModuleParameter>>,
    #[serde(rename = "export", default, skip_serializing_if = "Option::is_none")]
    pub export_descr: Option<Vec<ModuleParameter>>,
}

/// Response of `GET /modules`: all modules known to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleListResponse {
    pub status: RequestStatus,
    #[serde(default)]
    pub processes: Vec<Module>,
}
