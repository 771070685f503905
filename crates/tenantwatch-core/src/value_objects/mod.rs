//! Value objects

mod role;
mod signin_index;

pub use role::{is_valid_role, normalize_role};
pub use signin_index::SignInIndex;
