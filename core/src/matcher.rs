//! Required-work keyword matching.
//!
//! A requirement is a case-insensitive substring pattern. A description
//! "matches" when any requirement occurs somewhere inside it.

/// How a saved, non-empty description is labelled in the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkClassification {
    MatchesRequirement,
    ExtraWork,
}

impl WorkClassification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MatchesRequirement => "✓ This work matches your requirements",
            Self::ExtraWork => "★ Extra work identified!",
        }
    }
}

pub fn is_required_work<S: AsRef<str>>(text: &str, requirements: &[S]) -> bool {
    if text.is_empty() {
        return false;
    }
    let haystack = text.to_lowercase();
    requirements
        .iter()
        .any(|req| haystack.contains(&req.as_ref().to_lowercase()))
}

/// `None` for an empty description, otherwise exactly one of the two labels.
pub fn classify<S: AsRef<str>>(text: &str, requirements: &[S]) -> Option<WorkClassification> {
    if text.is_empty() {
        return None;
    }
    if is_required_work(text, requirements) {
        Some(WorkClassification::MatchesRequirement)
    } else {
        Some(WorkClassification::ExtraWork)
    }
}

/// Day-cell marker: a description exists and matches nothing.
pub fn is_extra_work<S: AsRef<str>>(text: &str, requirements: &[S]) -> bool {
    !text.is_empty() && !is_required_work(text, requirements)
}
