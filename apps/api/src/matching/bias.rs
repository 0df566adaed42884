use serde::Serialize;

/// Terms that can reveal gender or marital status. Scanned in this order.
pub const BIAS_TERMS: &[&str] = &["he", "she", "him", "her", "mr.", "mrs.", "miss"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasStatus {
    Pass,
    Flagged,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasAudit {
    pub status: BiasStatus,
    pub message: String,
}

impl BiasAudit {
    pub fn is_flagged(&self) -> bool {
        self.status == BiasStatus::Flagged
    }
}

/// Substring scan of the lowercased resume for `BIAS_TERMS`.
///
/// Matches are not word-bounded: "her" is found inside "there". That is a
/// known false-positive source and is kept as-is.
pub fn audit_bias(resume_text: &str) -> BiasAudit {
    let lowered = resume_text.to_lowercase();
    let found: Vec<&str> = BIAS_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect();

    if found.is_empty() {
        BiasAudit {
            status: BiasStatus::Pass,
            message: "No bias indicators found".to_string(),
        }
    } else {
        BiasAudit {
            status: BiasStatus::Flagged,
            message: format!("Potential bias indicators: {}", found.join(", ")),
        }
    }
}
