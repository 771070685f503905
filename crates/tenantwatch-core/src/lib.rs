//! # tenantwatch-core
//!
//! Domain layer containing directory entities, the sign-in index, domain
//! errors, and traits for the remote collaborators (directory fetch,
//! completion service). This crate has zero dependencies on infrastructure
//! (HTTP, file system, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    parse_signin_timestamp, DaysInactive, InactiveUserSummary, SignInRecord, UserRecord, NA,
    NO_GROUPS,
};
pub use error::DomainError;
pub use traits::{CompletionClient, CoreResult, DirectoryFetcher};
pub use value_objects::{is_valid_role, normalize_role, SignInIndex};
