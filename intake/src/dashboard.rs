//! Display-ordering rules for the results view
//!
//! Pure functions over the recommendation list. The backend's ordering is
//! authoritative: groups and professors are walked in the order received,
//! the only client-side liberties being the zero-professor view filter,
//! the top-match marker on index 0, and tag truncation.

use shared::{CourseGroup, ProfessorMatch};

/// How many tags the results view shows per professor
pub const TAG_DISPLAY_LIMIT: usize = 3;

/// Groups with at least one candidate, in received order. Empty groups
/// stay in the session data; they are only filtered from view.
pub fn visible_groups(groups: &[CourseGroup]) -> impl Iterator<Item = &CourseGroup> {
    groups.iter().filter(|group| group.has_candidates())
}

pub fn visible_class_count(groups: &[CourseGroup]) -> usize {
    visible_groups(groups).count()
}

pub fn total_professor_count(groups: &[CourseGroup]) -> usize {
    groups.iter().map(|group| group.professors.len()).sum()
}

/// Index 0 within a group is the top match, a display marker only
pub fn is_top_match(index: usize) -> bool {
    index == 0
}

/// Tags in original order, truncated for display
pub fn display_tags(professor: &ProfessorMatch) -> &[String] {
    let end = professor.tags.len().min(TAG_DISPLAY_LIMIT);
    &professor.tags[..end]
}

/// Headline numbers for the results view
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub visible_classes: usize,
    pub total_professors: usize,
    /// Mean match score over every candidate, when any exist
    pub average_match_score: Option<f64>,
    /// Mean rating over rated candidates only; the unrated sentinel is
    /// excluded rather than dragging the average down
    pub average_rating: Option<f64>,
}

pub fn summarize(groups: &[CourseGroup]) -> DashboardSummary {
    let professors: Vec<&ProfessorMatch> = groups
        .iter()
        .flat_map(|group| group.professors.iter())
        .collect();

    let average_match_score = if professors.is_empty() {
        None
    } else {
        Some(professors.iter().map(|p| p.match_score).sum::<f64>() / professors.len() as f64)
    };

    let rated: Vec<f64> = professors
        .iter()
        .filter(|p| p.is_rated())
        .map(|p| p.rating)
        .collect();
    let average_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().sum::<f64>() / rated.len() as f64)
    };

    DashboardSummary {
        visible_classes: visible_class_count(groups),
        total_professors: professors.len(),
        average_match_score,
        average_rating,
    }
}
