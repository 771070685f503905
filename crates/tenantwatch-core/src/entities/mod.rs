//! Domain entities

mod inactive;
mod signin;
mod user;

pub use inactive::{DaysInactive, InactiveUserSummary};
pub use signin::{parse_signin_timestamp, SignInRecord};
pub use user::{UserRecord, NA, NO_GROUPS};
