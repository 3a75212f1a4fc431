//! Types shared by the backend and the driver of the baseline diagnostic font build.

pub mod baseline;
pub mod catalog;
pub mod error;
pub mod orchestration;
mod serde;
pub mod types;
