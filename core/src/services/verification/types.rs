//! Result types for verification operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of issuing a code; the code itself only travels by mail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCodeResult {
    /// Id of the stored verification row
    pub verification_id: i64,
    /// Transport message id of the dispatched email
    pub message_id: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}
