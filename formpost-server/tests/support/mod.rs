//! Test support utilities for end-to-end form tests
//!
//! Starts a real form server on an ephemeral port, wired to a mock provider
//! API, so tests can follow a submission from the HTTP request to the
//! outbound provider call.

pub mod harness;
#[path = "../../../formpost-delivery/tests/support/mock_provider.rs"]
pub mod mock_provider;

pub use harness::FormTestHarness;
