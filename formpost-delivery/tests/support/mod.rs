//! Test support utilities for provider delivery tests

pub mod mock_provider;

pub use mock_provider::{MockProviderServer, RecordedRequest};
