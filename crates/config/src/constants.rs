//! Centralized defaults for the actinia client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

/// Default API host, including the mount path of the REST interface.
pub const DEFAULT_API_HOST: &str = "http://localhost:8005/savana";

/// Default API flavor the client talks to.
pub const DEFAULT_API_SOURCE: &str = "actinia";

/// Default actinia API version tag.
pub const DEFAULT_API_VERSION: &str = "4.2.1";

/// Default language for error-context strings.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;
