//! Mock D&B Direct+ server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Direct+
//! token, search and contact endpoints for integration and end-to-end
//! testing. Unlike wiremock which mocks at the HTTP level per-test, this
//! server maintains state across requests, enabling realistic workflow
//! testing: exchange credentials, search, then look up contacts.
//!
//! # Example
//!
//! ```ignore
//! use dnbapi::mock_server::MockServer;
//! use dnbapi::{ClientOption, DnbClient, TypeaheadQuery};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = DnbClient::new([
//!         ClientOption::base_url(server.url()),
//!         ClientOption::credentials("mock-key", "mock-secret"),
//!     ])
//!     .unwrap()
//!     .authenticated()
//!     .await
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let result = client.typeahead_search(&TypeaheadQuery::new("gorman")).await.unwrap();
//!     assert!(result.candidates_matched_quantity.unwrap() > 0);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, MOCK_KEY, MOCK_SECRET};
pub use server::MockServer;
pub use state::{MockState, DEFAULT_TOKEN};
