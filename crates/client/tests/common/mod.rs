//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the
//!   crate root and must be valid JSON.
//! - Every fixture is a full wire body, i.e. `{ "response": <payload> }`.

// Re-export test utilities from actinia-client
#[allow(unused_imports)]
pub use actinia_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use actinia_client::ActiniaClient;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server, with default settings.
#[allow(dead_code)]
pub fn test_client(mock_server: &MockServer) -> ActiniaClient {
    ActiniaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .expect("client should build against mock server URI")
}
