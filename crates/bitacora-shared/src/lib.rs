//! # Bitácora Shared
//!
//! Wire types shared across the API surface: per-route request bodies and
//! the `{mensaje, data}` / `{mensaje, error}` envelopes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
