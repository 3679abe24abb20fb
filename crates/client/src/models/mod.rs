//! Data models for actinia API responses.
//!
//! Every endpoint returns a JSON body shaped `{ "response": <payload> }`;
//! the types in this module parse `<payload>`. Models tolerate unknown
//! keys, keep optional nested models absent when the key is absent, and
//! fail construction when an enumerated field holds an unknown token.

pub mod enums;
pub mod layers;
pub mod locations;
pub mod mapsets;
pub mod modules;
pub mod process;
pub mod simple;

pub use enums::{ParamSchemaSubType, ParamSchemaType, RequestStatus};
pub use layers::{ImagePngResponse, RasterInfo, RasterInfoResponse};
pub use locations::LocationListResponse;
pub use mapsets::{MapsetInfo, MapsetInfoResponse, Region};
pub use modules::{Module, ModuleListResponse, ModuleParameter, ModuleParameterSchema};
pub use process::{
    ApiInfo, ExceptionTraceback, ModuleCall, ProcessLogEntry, ProcessResponse, ProgressInfo,
    UrlInfo,
};
pub use simple::{SimpleResponse, SimpleStatusCodeResponse};
