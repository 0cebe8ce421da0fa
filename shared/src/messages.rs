//! Request and response shapes for the two backend endpoints
//!
//! Both endpoints accept multipart form bodies and answer JSON. A response
//! is a failure when the status is non-2xx, the success flag is false, or
//! the expected payload field is missing; the `error` string, when present,
//! is surfaced to the user verbatim.

use serde::{Deserialize, Serialize};

use crate::types::{CourseGroup, Department, Preferences};

/// Endpoint paths, relative to the configured base URL
pub const PARSE_TRANSCRIPT_PATH: &str = "/api/parse-transcript";
pub const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

/// The only MIME type the parse endpoint accepts
pub const PDF_MIME: &str = "application/pdf";

/// Multipart field names
pub const TRANSCRIPT_FIELD: &str = "transcript";
pub const COMPLETED_COURSES_FIELD: &str = "completed_courses";
pub const DEPARTMENT_FIELD: &str = "department";
pub const PREFERENCES_FIELD: &str = "preferences";

/// Response to `POST /api/parse-transcript`
#[derive(Debug, Clone, Deserialize)]
pub struct ParseTranscriptResponse {
    #[serde(default)]
    pub success: bool,
    /// Completed course identifiers, in transcript order
    pub courses: Option<Vec<String>>,
    pub error: Option<String>,
}

/// Everything the backend needs to answer statelessly: completed courses,
/// department, and the full preference set. An empty course list is valid
/// (new student) and must not be rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub completed_courses: Vec<String>,
    pub department: Department,
    pub preferences: Preferences,
}

impl RecommendationRequest {
    /// JSON-encoded `completed_courses` form field
    pub fn completed_courses_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.completed_courses)
    }

    /// JSON-encoded `preferences` form field
    pub fn preferences_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.preferences)
    }
}

/// Response to `POST /api/recommendations`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub success: bool,
    /// Course groups in backend rank order; groups with zero professors
    /// are valid and left to the consumer to filter from view
    #[serde(default)]
    pub recommendations: Vec<CourseGroup>,
    pub error: Option<String>,
}
