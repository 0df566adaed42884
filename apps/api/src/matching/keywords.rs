//! Keyword overlap scoring and matched/missing feedback between a JD and a resume.

use serde::Serialize;

use crate::matching::round_to_hundredths;
use crate::matching::tokens::TokenSet;

/// Cap on each feedback list.
pub const MAX_FEEDBACK_KEYWORDS: usize = 15;

/// Keyword feedback for one resume. Both lists are sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Percentage of JD tokens that also appear in the resume, two decimals.
/// An empty JD scores 0.0.
pub fn keyword_score(jd: &TokenSet, resume: &TokenSet) -> f64 {
    if jd.is_empty() {
        return 0.0;
    }
    let matched = jd.intersection(resume).count();
    round_to_hundredths(matched as f64 / jd.len() as f64 * 100.0)
}

/// Lexicographically smallest `MAX_FEEDBACK_KEYWORDS` of JD ∩ R and of JD − R.
pub fn get_feedback(jd: &TokenSet, resume: &TokenSet) -> Feedback {
    Feedback {
        matched: jd
            .intersection(resume)
            .take(MAX_FEEDBACK_KEYWORDS)
            .cloned()
            .collect(),
        missing: jd
            .difference(resume)
            .take(MAX_FEEDBACK_KEYWORDS)
            .cloned()
            .collect(),
    }
}
