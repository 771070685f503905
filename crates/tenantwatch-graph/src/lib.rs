//! # tenantwatch-graph
//!
//! Directory layer implementing the fetch traits from `tenantwatch-core`
//! against Microsoft Graph, plus the optional completion client used for
//! insight analyses.
//!
//! ## Overview
//!
//! - Client-credentials token acquisition with in-process caching
//! - Roster fetch from `/users` with group expansion and paging
//! - Sign-in fetch from `/auditLogs/signIns` over a rolling window
//! - Azure OpenAI chat-completion client behind [`CompletionClient`]
//!
//! [`CompletionClient`]: tenantwatch_core::CompletionClient

pub mod auth;
pub mod client;
pub mod completion;
pub mod error;

// Re-export commonly used types
pub use auth::TokenProvider;
pub use client::GraphDirectoryClient;
pub use completion::HttpCompletionClient;
pub use error::GraphError;
