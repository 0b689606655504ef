//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::SessionConfig;
use crate::service::StoreService;
use crate::transport::mock::MockTransport;
use crate::Result;

/// Build a MockTransport pre-seeded with the given raw responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: &[&str]) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_responses(&mut mock, responses);
    mock
}

/// Push raw hex responses onto a MockTransport in order.
#[doc(hidden)]
pub fn seed_responses(mock: &mut MockTransport, responses: &[&str]) {
    for r in responses {
        mock.push_response(r);
    }
}

/// Convenience: a StoreService with default configuration backed by a
/// MockTransport pre-seeded with the provided responses.
#[doc(hidden)]
pub fn mock_service(responses: &[&str]) -> Result<StoreService<MockTransport>> {
    StoreService::new(mock_with_responses(responses), SessionConfig::default())
}
