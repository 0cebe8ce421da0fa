//! Intake workflow driver
//!
//! Wires the session state machine to an injected backend implementation.
//! Each network operation awaits exactly one response and either applies
//! it wholesale or leaves the session untouched; there is no partial
//! application and nothing is retried automatically.

use tracing::{info, warn};

use crate::error::IntakeResult;
use crate::session::Session;
use crate::traits::BackendApi;
use shared::{CourseGroup, Preferences};

/// The intake workflow: one session plus the backend boundary
pub struct Intake<B: BackendApi> {
    session: Session,
    backend: B,
}

impl<B: BackendApi> Intake<B> {
    /// Create a fresh session with an injected backend
    pub fn new(backend: B) -> Self {
        Self {
            session: Session::new(),
            backend,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Local transitions (start, back, reset, attach, department) are
    /// driven directly on the session; its guards keep them valid.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Upload the attached transcript for parsing. On success the
    /// completed-course list is replaced wholesale and the session
    /// advances to Review; on failure nothing changes but the loading
    /// flag, and the error carries the message to show the student.
    pub async fn submit_transcript(&mut self) -> IntakeResult<()> {
        let result = {
            let transcript = self.session.begin_parse()?;
            self.backend.parse_transcript(transcript).await
        };

        match result {
            Ok(courses) => {
                info!(count = courses.len(), "transcript parsed");
                self.session.apply_parse_success(courses);
                Ok(())
            }
            Err(e) => {
                warn!("transcript parse failed: {e}");
                self.session.end_request();
                Err(e)
            }
        }
    }

    /// Store the submitted preference set and request recommendations.
    /// On success the recommendation list is replaced wholesale and the
    /// session advances to Results.
    pub async fn submit_preferences(&mut self, preferences: Preferences) -> IntakeResult<()> {
        let request = self.session.begin_recommend(preferences)?;
        match self.backend.recommendations(&request).await {
            Ok(groups) => {
                info!(groups = groups.len(), "recommendations received");
                check_rank_order(&groups);
                self.session.apply_recommendations(groups);
                Ok(())
            }
            Err(e) => {
                warn!("recommendation request failed: {e}");
                self.session.end_request();
                Err(e)
            }
        }
    }
}

/// The backend owns the ranking; an out-of-order group is logged but
/// rendered exactly as received, never re-sorted.
fn check_rank_order(groups: &[CourseGroup]) {
    for group in groups {
        if !group.is_rank_ordered() {
            warn!(
                course = %group.course_code,
                "backend returned match scores out of rank order"
            );
        }
    }
}
