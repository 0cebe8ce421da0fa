//! Intake session state machine
//!
//! Owns the stage sequencing and all state accumulated for one visit.
//! Forward moves advance exactly one stage per successful operation, Back
//! moves exactly one stage backward, and reset returns to Welcome from
//! anywhere without clearing any other field. Course lists and
//! recommendations are only ever replaced wholesale by a backend response.

use shared::{CourseGroup, Department, Preferences, RecommendationRequest};

use crate::error::{IntakeError, IntakeResult};
use crate::types::TranscriptFile;

/// One step of the linear intake workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Upload,
    Review,
    Preferences,
    Results,
}

impl Stage {
    /// The stage a single Back action reaches, if any
    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Welcome => None,
            Stage::Upload => Some(Stage::Welcome),
            Stage::Review => Some(Stage::Upload),
            Stage::Preferences => Some(Stage::Review),
            Stage::Results => Some(Stage::Preferences),
        }
    }
}

/// All state accumulated for one user's visit. Created fresh per visit,
/// lives entirely in memory, and is never persisted.
#[derive(Debug)]
pub struct Session {
    stage: Stage,
    department: Department,
    transcript: Option<TranscriptFile>,
    completed_courses: Vec<String>,
    preferences: Preferences,
    recommendations: Vec<CourseGroup>,
    is_loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::Welcome,
            department: Department::default(),
            transcript: None,
            completed_courses: Vec::new(),
            preferences: Preferences::default(),
            recommendations: Vec::new(),
            is_loading: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn transcript(&self) -> Option<&TranscriptFile> {
        self.transcript.as_ref()
    }

    pub fn completed_courses(&self) -> &[String] {
        &self.completed_courses
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn recommendations(&self) -> &[CourseGroup] {
        &self.recommendations
    }

    /// True only while a parse or recommend request is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Welcome → Upload
    pub fn start(&mut self) -> IntakeResult<()> {
        self.require_stage(Stage::Welcome, "start")?;
        self.stage = Stage::Upload;
        Ok(())
    }

    /// Move exactly one stage backward
    pub fn back(&mut self) -> IntakeResult<()> {
        match self.stage.previous() {
            Some(previous) => {
                self.stage = previous;
                Ok(())
            }
            None => Err(IntakeError::InvalidTransition {
                stage: self.stage,
                action: "go back",
            }),
        }
    }

    /// The logo affordance: jump to Welcome from any stage. Every other
    /// field is retained; it simply sits unused until re-populated.
    pub fn reset(&mut self) {
        self.stage = Stage::Welcome;
    }

    /// Attach a transcript during Upload. Non-PDF files are rejected
    /// locally with no mutation and no network activity.
    pub fn attach_transcript(&mut self, file: TranscriptFile) -> IntakeResult<()> {
        self.require_stage(Stage::Upload, "attach a transcript")?;
        if !file.is_pdf() {
            return Err(IntakeError::InvalidFile {
                message: format!("{} is not a PDF transcript", file.name),
            });
        }
        self.transcript = Some(file);
        Ok(())
    }

    pub fn remove_transcript(&mut self) -> IntakeResult<()> {
        self.require_stage(Stage::Upload, "remove the transcript")?;
        self.transcript = None;
        Ok(())
    }

    /// The department is only editable while on the Upload stage
    pub fn set_department(&mut self, department: Department) -> IntakeResult<()> {
        self.require_stage(Stage::Upload, "change the department")?;
        self.department = department;
        Ok(())
    }

    /// Review → Preferences
    pub fn continue_to_preferences(&mut self) -> IntakeResult<()> {
        self.require_stage(Stage::Review, "continue")?;
        self.stage = Stage::Preferences;
        Ok(())
    }

    /// Guard and begin the parse request: Upload stage, transcript
    /// attached, nothing already in flight. Returns the transcript to
    /// upload with the loading flag set.
    pub(crate) fn begin_parse(&mut self) -> IntakeResult<&TranscriptFile> {
        if self.is_loading {
            return Err(IntakeError::RequestInFlight);
        }
        if self.stage != Stage::Upload {
            return Err(IntakeError::InvalidTransition {
                stage: self.stage,
                action: "submit a transcript",
            });
        }
        match self.transcript {
            Some(ref file) => {
                self.is_loading = true;
                Ok(file)
            }
            None => Err(IntakeError::InvalidFile {
                message: "no transcript attached".to_string(),
            }),
        }
    }

    /// Guard and begin the recommend request: Preferences stage, nothing
    /// in flight. Stores the submitted preference set and returns the
    /// self-contained request for the backend.
    pub(crate) fn begin_recommend(
        &mut self,
        preferences: Preferences,
    ) -> IntakeResult<RecommendationRequest> {
        if self.is_loading {
            return Err(IntakeError::RequestInFlight);
        }
        if self.stage != Stage::Preferences {
            return Err(IntakeError::InvalidTransition {
                stage: self.stage,
                action: "request recommendations",
            });
        }
        self.preferences = preferences;
        self.is_loading = true;
        Ok(RecommendationRequest {
            completed_courses: self.completed_courses.clone(),
            department: self.department,
            preferences: self.preferences.clone(),
        })
    }

    /// Wholesale replacement of the course list; the loading flag drops
    /// before the stage changes
    pub(crate) fn apply_parse_success(&mut self, courses: Vec<String>) {
        self.is_loading = false;
        self.completed_courses = courses;
        self.stage = Stage::Review;
    }

    /// Wholesale replacement of the recommendations
    pub(crate) fn apply_recommendations(&mut self, groups: Vec<CourseGroup>) {
        self.is_loading = false;
        self.recommendations = groups;
        self.stage = Stage::Results;
    }

    /// Failure path: drop the loading flag, leave everything else intact
    pub(crate) fn end_request(&mut self) {
        self.is_loading = false;
    }

    fn require_stage(&self, expected: Stage, action: &'static str) -> IntakeResult<()> {
        if self.stage != expected {
            return Err(IntakeError::InvalidTransition {
                stage: self.stage,
                action,
            });
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> TranscriptFile {
        TranscriptFile::new("transcript.pdf", b"%PDF-1.7".to_vec())
    }

    #[test]
    fn starts_at_welcome_with_defaults() {
        let session = Session::new();
        assert_eq!(session.stage(), Stage::Welcome);
        assert_eq!(session.department(), Department::CivilEngineering);
        assert!(session.transcript().is_none());
        assert!(session.completed_courses().is_empty());
        assert!(session.recommendations().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn forward_moves_advance_one_stage() {
        let mut session = Session::new();
        session.start().unwrap();
        assert_eq!(session.stage(), Stage::Upload);

        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec!["MATH-101".into()]);
        assert_eq!(session.stage(), Stage::Review);

        session.continue_to_preferences().unwrap();
        assert_eq!(session.stage(), Stage::Preferences);

        session.begin_recommend(Preferences::default()).unwrap();
        session.apply_recommendations(vec![]);
        assert_eq!(session.stage(), Stage::Results);
    }

    #[test]
    fn no_stage_skipping() {
        let mut session = Session::new();
        assert!(matches!(
            session.continue_to_preferences(),
            Err(IntakeError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.begin_recommend(Preferences::default()),
            Err(IntakeError::InvalidTransition { .. })
        ));
        assert_eq!(session.stage(), Stage::Welcome);
    }

    #[test]
    fn back_moves_exactly_one_stage() {
        let mut session = Session::new();
        session.start().unwrap();
        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec![]);
        session.continue_to_preferences().unwrap();

        session.back().unwrap();
        assert_eq!(session.stage(), Stage::Review);
        session.back().unwrap();
        assert_eq!(session.stage(), Stage::Upload);
        session.back().unwrap();
        assert_eq!(session.stage(), Stage::Welcome);
        assert!(matches!(
            session.back(),
            Err(IntakeError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn non_pdf_is_rejected_without_mutation() {
        let mut session = Session::new();
        session.start().unwrap();

        let result =
            session.attach_transcript(TranscriptFile::new("notes.docx", b"word".to_vec()));
        assert!(matches!(result, Err(IntakeError::InvalidFile { .. })));
        assert!(session.transcript().is_none());
        assert!(session.completed_courses().is_empty());
    }

    #[test]
    fn department_only_editable_during_upload() {
        let mut session = Session::new();
        assert!(session.set_department(Department::ComputerScience).is_err());

        session.start().unwrap();
        session.set_department(Department::ComputerScience).unwrap();
        assert_eq!(session.department(), Department::ComputerScience);

        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec![]);
        assert!(session.set_department(Department::CivilEngineering).is_err());
        assert_eq!(session.department(), Department::ComputerScience);
    }

    #[test]
    fn parse_requires_attached_transcript() {
        let mut session = Session::new();
        session.start().unwrap();
        assert!(matches!(
            session.begin_parse(),
            Err(IntakeError::InvalidFile { .. })
        ));
        assert!(!session.is_loading());
    }

    #[test]
    fn second_request_while_loading_is_rejected() {
        let mut session = Session::new();
        session.start().unwrap();
        session.attach_transcript(pdf()).unwrap();

        session.begin_parse().unwrap();
        assert!(session.is_loading());
        assert!(matches!(
            session.begin_parse(),
            Err(IntakeError::RequestInFlight)
        ));
    }

    #[test]
    fn failed_request_leaves_state_intact() {
        let mut session = Session::new();
        session.start().unwrap();
        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();

        session.end_request();
        assert!(!session.is_loading());
        assert_eq!(session.stage(), Stage::Upload);
        assert!(session.completed_courses().is_empty());
    }

    #[test]
    fn loading_is_false_whenever_stage_changes() {
        let mut session = Session::new();
        session.start().unwrap();
        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec!["MATH-101".into(), "PHYS-201".into()]);
        assert!(!session.is_loading());
        assert_eq!(session.completed_courses(), ["MATH-101", "PHYS-201"]);
    }

    #[test]
    fn reset_returns_to_welcome_and_clears_nothing() {
        let mut session = Session::new();
        session.start().unwrap();
        session.set_department(Department::ComputerScience).unwrap();
        session.attach_transcript(pdf()).unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec!["CSE 1310".into()]);
        session.continue_to_preferences().unwrap();
        session.begin_recommend(Preferences::default()).unwrap();
        session.apply_recommendations(vec![CourseGroup {
            course_code: "CSE 2315".into(),
            course_name: "Discrete Structures".into(),
            professors: vec![],
        }]);
        assert_eq!(session.stage(), Stage::Results);

        session.reset();
        assert_eq!(session.stage(), Stage::Welcome);
        assert_eq!(session.department(), Department::ComputerScience);
        assert!(session.transcript().is_some());
        assert_eq!(session.completed_courses(), ["CSE 1310"]);
        assert_eq!(session.recommendations().len(), 1);

        // The old data stays inert: the flow restarts cleanly and the
        // stale recommendations are only replaced by the next response.
        session.start().unwrap();
        session.begin_parse().unwrap();
        session.apply_parse_success(vec!["CSE 1320".into()]);
        assert_eq!(session.stage(), Stage::Review);
        assert_eq!(session.completed_courses(), ["CSE 1320"]);
        assert_eq!(session.recommendations().len(), 1);
    }
}
