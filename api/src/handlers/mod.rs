//! Request handling helpers shared by every route.

pub mod error;

pub use error::{validate_request, ApiError, ApiResult};
