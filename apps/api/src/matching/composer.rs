//! Result composition: combined score, improvement tips and batch ranking.

use serde::Serialize;

use crate::matching::bias::BiasAudit;
use crate::matching::keywords::Feedback;
use crate::matching::round_to_hundredths;

pub const SEMANTIC_WEIGHT: f64 = 0.7;
pub const KEYWORD_WEIGHT: f64 = 0.3;

/// Missing keywords named in the "add keywords" tip.
const TIP_KEYWORD_LIMIT: usize = 5;

pub const TIP_LOW_MATCH: &str =
    "Try adding measurable achievements and project details to make your resume more impactful.";
pub const TIP_CLOSE_MATCH: &str =
    "You're close! Emphasize relevant tools or technologies mentioned in the job description.";
pub const TIP_STRONG_MATCH: &str =
    "Excellent match! Just ensure formatting and clarity for submission.";
pub const TIP_REDUCE_BIAS: &str =
    "Consider removing personal identifiers like names, gendered words, or school names to reduce bias.";

/// Per-resume result returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRecord {
    pub candidate_name: String,
    pub semantic_score: f64,
    pub keyword_score: f64,
    pub combined_score: f64,
    pub feedback: Feedback,
    pub bias_audit: BiasAudit,
    /// Only present when the batch holds a single resume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_tips: Option<Vec<String>>,
}

/// round(0.7 × semantic + 0.3 × keyword, 2)
pub fn combined_score(semantic_score: f64, keyword_score: f64) -> f64 {
    round_to_hundredths(SEMANTIC_WEIGHT * semantic_score + KEYWORD_WEIGHT * keyword_score)
}

/// Tier tip for a combined score: <60, [60, 80), ≥80.
fn score_tier_tip(combined_score: f64) -> &'static str {
    if combined_score < 60.0 {
        TIP_LOW_MATCH
    } else if combined_score < 80.0 {
        TIP_CLOSE_MATCH
    } else {
        TIP_STRONG_MATCH
    }
}

/// Ordered tips: missing keywords (if any), exactly one score tier, bias (if flagged).
pub fn improvement_tips(combined_score: f64, feedback: &Feedback, bias_audit: &BiasAudit) -> Vec<String> {
    let mut tips = Vec::with_capacity(3);

    if !feedback.missing.is_empty() {
        let top_missing: Vec<&str> = feedback
            .missing
            .iter()
            .take(TIP_KEYWORD_LIMIT)
            .map(String::as_str)
            .collect();
        tips.push(format!(
            "Consider adding keywords like: {}.",
            top_missing.join(", ")
        ));
    }

    tips.push(score_tier_tip(combined_score).to_string());

    if bias_audit.is_flagged() {
        tips.push(TIP_REDUCE_BIAS.to_string());
    }

    tips
}

/// Assembles one record. `single_resume` switches on improvement tips.
pub fn compose_record(
    candidate_name: String,
    semantic_score: f64,
    keyword_score: f64,
    feedback: Feedback,
    bias_audit: BiasAudit,
    single_resume: bool,
) -> ScoreRecord {
    let combined_score = combined_score(semantic_score, keyword_score);
    let improvement_tips =
        single_resume.then(|| improvement_tips(combined_score, &feedback, &bias_audit));

    ScoreRecord {
        candidate_name,
        semantic_score,
        keyword_score,
        combined_score,
        feedback,
        bias_audit,
        improvement_tips,
    }
}

/// Sorts by combined score, highest first. Order among ties is unspecified.
pub fn rank_results(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
}
