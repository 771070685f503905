//! # tenantwatch-store
//!
//! Storage layer for the locally persisted sign-in log.
//!
//! ## Overview
//!
//! Sign-in activity is kept in a flat CSV file so analyses can run without a
//! live directory connection. This crate handles:
//!
//! - Reading the log into domain [`SignInRecord`]s, tolerating header
//!   variants and skipping malformed rows
//! - Replacing the log wholesale after a fresh fetch
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tenantwatch_store::SignInLogStore;
//!
//! let store = SignInLogStore::new("signin_logs.csv");
//! let records = store.read()?;
//! ```
//!
//! [`SignInRecord`]: tenantwatch_core::SignInRecord

pub mod error;
pub mod models;
pub mod signin_log;

// Re-export commonly used types
pub use error::StoreError;
pub use models::SignInRow;
pub use signin_log::SignInLogStore;
