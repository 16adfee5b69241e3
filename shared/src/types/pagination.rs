//! Offset pagination for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: u32 = 10;
const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

/// Skip/limit window as accepted by `GET /applications/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of rows to skip
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Create a window, clamping the limit to `1..=100`
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Clamp a deserialized window
    pub fn sanitized(self) -> Self {
        Self::new(self.skip, self.limit)
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
