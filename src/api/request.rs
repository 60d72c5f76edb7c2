//! Request types for the attendance engine API.

use serde::{Deserialize, Serialize};

use crate::models::Gender;

/// Request body for `POST /attendance` and `POST /summaries`.
///
/// `text` is the plain text already extracted from the attendance export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Extracted document text.
    pub text: String,
    /// Selects the weekday standard shift.
    pub gender: Gender,
}
