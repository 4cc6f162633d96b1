//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain values, grouped views, service
//! orchestration against the in-memory stores, service behaviour against
//! mocked ports, and concurrent creation.
