//! Core contract types shared with the scoring backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic department the student is majoring in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "CE")]
    CivilEngineering,
    #[serde(rename = "CSE")]
    ComputerScience,
}

impl Department {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CE" => Some(Department::CivilEngineering),
            "CSE" => Some(Department::ComputerScience),
            _ => None,
        }
    }

    /// Wire code sent in the `department` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::CivilEngineering => "CE",
            Department::ComputerScience => "CSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::CivilEngineering => "Civil Engineering (CE)",
            Department::ComputerScience => "Computer Science (CSE)",
        }
    }
}

impl Default for Department {
    fn default() -> Self {
        Department::CivilEngineering
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Learning-style preference flags carried in the recommendation request.
///
/// Field names serialize to the camelCase keys the backend scores against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub extra_credit: bool,
    pub clear_grading: bool,
    pub good_feedback: bool,
    pub caring: bool,
    pub lecture_heavy: bool,
    pub group_projects: bool,
    pub test_heavy: bool,
    pub homework_heavy: bool,
    pub strict_attendance: bool,
    pub pop_quizzes: bool,
}

impl Default for Preferences {
    /// Starting configuration: priorities and lecture preference on,
    /// tolerances (test heavy, homework heavy, attendance, quizzes) off.
    fn default() -> Self {
        Self {
            extra_credit: true,
            clear_grading: true,
            good_feedback: true,
            caring: true,
            lecture_heavy: true,
            group_projects: false,
            test_heavy: false,
            homework_heavy: false,
            strict_attendance: false,
            pop_quizzes: false,
        }
    }
}

impl Preferences {
    /// All flags with their wire names, in display order
    pub fn flags(&self) -> [(&'static str, bool); 10] {
        [
            ("extraCredit", self.extra_credit),
            ("clearGrading", self.clear_grading),
            ("goodFeedback", self.good_feedback),
            ("caring", self.caring),
            ("lectureHeavy", self.lecture_heavy),
            ("groupProjects", self.group_projects),
            ("testHeavy", self.test_heavy),
            ("homeworkHeavy", self.homework_heavy),
            ("strictAttendance", self.strict_attendance),
            ("popQuizzes", self.pop_quizzes),
        ]
    }

    /// Flip a flag by its wire name. Returns false if the name is unknown.
    pub fn toggle(&mut self, name: &str) -> bool {
        let flag = match name {
            "extraCredit" => &mut self.extra_credit,
            "clearGrading" => &mut self.clear_grading,
            "goodFeedback" => &mut self.good_feedback,
            "caring" => &mut self.caring,
            "lectureHeavy" => &mut self.lecture_heavy,
            "groupProjects" => &mut self.group_projects,
            "testHeavy" => &mut self.test_heavy,
            "homeworkHeavy" => &mut self.homework_heavy,
            "strictAttendance" => &mut self.strict_attendance,
            "popQuizzes" => &mut self.pop_quizzes,
            _ => return false,
        };
        *flag = !*flag;
        true
    }
}

/// Categorical difficulty label assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Challenging,
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Challenging => "Challenging",
            Difficulty::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// One scored professor candidate within a course group.
///
/// `match_score` is backend-computed and authoritative; candidates arrive
/// already ranked and must never be re-sorted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorMatch {
    pub id: String,
    pub name: String,
    /// Quality rating in [0, 5]; 0.0 is the unrated sentinel
    pub rating: f64,
    /// Suitability score in [0, 100]
    pub match_score: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub review_count: u32,
    /// Descriptive tags, rendered in the order received
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProfessorMatch {
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

/// One target course plus its ranked candidate instructors.
///
/// Ordering of `professors` is the authoritative rank (index 0 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGroup {
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub professors: Vec<ProfessorMatch>,
}

impl CourseGroup {
    pub fn has_candidates(&self) -> bool {
        !self.professors.is_empty()
    }

    /// True when match scores are non-increasing by index, as the
    /// contract requires of the backend
    pub fn is_rank_ordered(&self) -> bool {
        self.professors
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score)
    }
}
