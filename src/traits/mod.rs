//! Trait definitions for Jira operations.
//!
//! Each resource type implements the traits it supports.

mod get;

pub use get::Get;
