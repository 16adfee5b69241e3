//! Type definitions shared by the HTTP layer and the services
//!
//! - `pagination` - skip/limit window for list endpoints
//! - `response` - acknowledgement and health check bodies

pub mod pagination;
pub mod response;

pub use pagination::PageRequest;
pub use response::{HealthResponse, HealthStatus, MessageResponse};
