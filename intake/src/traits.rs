//! Service trait definitions for dependency injection

use async_trait::async_trait;

use crate::error::IntakeResult;
use crate::types::TranscriptFile;
use shared::{CourseGroup, RecommendationRequest};

/// Boundary to the external scoring backend. The backend is the sole
/// source of truth for parsing and ranking; implementations only move
/// data across the wire.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Parse an uploaded transcript into completed course identifiers,
    /// in transcript order
    async fn parse_transcript(&self, transcript: &TranscriptFile) -> IntakeResult<Vec<String>>;

    /// Fetch ranked course groups for the given completed courses,
    /// department, and preference set
    async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> IntakeResult<Vec<CourseGroup>>;
}
