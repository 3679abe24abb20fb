//! Closed-vocabulary value types for enumerated server fields.
//!
//! Each enum accepts exactly the tokens the actinia API documents; any
//! other token fails construction with a [`ValidationError`] instead of
//! being silently accepted. Deserialization routes through [`FromStr`],
//! so an invalid token aborts the construction of the containing model.

use crate::error::ValidationError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an asynchronous actinia request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Accepted,
    Running,
    Finished,
    Terminated,
    Error,
    Success,
}

impl RequestStatus {
    /// All legal wire tokens.
    pub const VARIANTS: [&'static str; 6] = [
        "accepted",
        "running",
        "finished",
        "terminated",
        "error",
        "success",
    ];

    /// The wire token, unchanged.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Terminated => "terminated",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    /// True for states the server will not leave again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished | Self::Terminated | Self::Error | Self::Success
        )
    }
}

impl FromStr for RequestStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "running" => Ok(Self::Running),
            "finished" => Ok(Self::Finished),
            "terminated" => Ok(Self::Terminated),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            other => Err(ValidationError::new("status", other)),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestStatus.{}", self.as_str())
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(D::Error::custom)
    }
}

/// Base data type of a module parameter schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSchemaType {
    String,
    Number,
    Boolean,
    Array,
    Integer,
}

impl ParamSchemaType {
    pub const VARIANTS: [&'static str; 5] = ["string", "number", "boolean", "array", "integer"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Integer => "integer",
        }
    }
}

impl FromStr for ParamSchemaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "integer" => Ok(Self::Integer),
            other => Err(ValidationError::new("type", other)),
        }
    }
}

impl fmt::Display for ParamSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParamSchemaType.{}", self.as_str())
    }
}

impl Serialize for ParamSchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParamSchemaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(D::Error::custom)
    }
}

/// GRASS-specific refinement of a parameter's base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamSchemaSubType {
    Cell,
    Vector,
    Coords,
    Separator,
    DbColumn,
    ColorTable,
    Grid3,
    File,
    Dir,
}

impl ParamSchemaSubType {
    pub const VARIANTS: [&'static str; 9] = [
        "cell",
        "vector",
        "coords",
        "separator",
        "dbcolumn",
        "colortable",
        "grid3",
        "file",
        "dir",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::Vector => "vector",
            Self::Coords => "coords",
            Self::Separator => "separator",
            Self::DbColumn => "dbcolumn",
            Self::ColorTable => "colortable",
            Self::Grid3 => "grid3",
            Self::File => "file",
            Self::Dir => "dir",
        }
    }
}

impl FromStr for ParamSchemaSubType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cell" => Ok(Self::Cell),
            "vector" => Ok(Self::Vector),
            "coords" => Ok(Self::Coords),
            "separator" => Ok(Self::Separator),
            "dbcolumn" => Ok(Self::DbColumn),
            "colortable" => Ok(Self::ColorTable),
            "grid3" => Ok(Self::Grid3),
            "file" => Ok(Self::File),
            "dir" => Ok(Self::Dir),
            other => Err(ValidationError::new("subtype", other)),
        }
    }
}

impl fmt::Display for ParamSchemaSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParamSchemaSubType.{}", self.as_str())
    }
}

impl Serialize for ParamSchemaSubType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParamSchemaSubType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(D::Error::custom)
    }
}
