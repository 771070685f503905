//! Request handlers

pub mod aggregates;
pub mod analysis;
pub mod health;
pub mod insights;
pub mod query;
pub mod refresh;
pub mod users;
