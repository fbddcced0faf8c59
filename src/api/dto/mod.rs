//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod charts;
pub mod health;
pub mod selection;
pub mod targets;
