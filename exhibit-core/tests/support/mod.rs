//! Shared fixtures for exhibit-core integration tests.

pub mod surface;
