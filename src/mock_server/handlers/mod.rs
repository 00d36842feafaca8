//! HTTP request handlers for the mock server.

pub mod priorities;

pub use priorities::*;
