//! Actinia REST API client.
//!
//! This crate provides a type-safe client for the actinia (GRASS GIS)
//! geoprocessing REST API. Raw JSON payloads are parsed into validated
//! response models; every endpoint returns either the declared success
//! model or the declared error model, selected by HTTP status.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod strings;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::ActiniaClient;
pub use client::builder::ActiniaClientBuilder;
pub use endpoints::{ApiResponse, RenderOptions};
pub use error::{ClientError, Result, ValidationError};
pub use models::{
    ApiInfo, ExceptionTraceback, ImagePngResponse, LocationListResponse, MapsetInfo,
    MapsetInfoResponse, Module, ModuleCall, ModuleListResponse, ModuleParameter,
    ModuleParameterSchema, ParamSchemaSubType, ParamSchemaType, ProcessLogEntry, ProcessResponse,
    ProgressInfo, RasterInfo, RasterInfoResponse, Region, RequestStatus, SimpleResponse,
    SimpleStatusCodeResponse, UrlInfo,
};
