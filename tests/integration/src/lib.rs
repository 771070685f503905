//! Integration test utilities for tenantwatch
//!
//! This crate provides fixtures and helpers for exercising the analysis
//! pipeline and the REST API end to end, without any live directory.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
