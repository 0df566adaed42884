//! Per-request scoring: one JD against a batch of uploaded resumes.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::bias::audit_bias;
use crate::matching::composer::{compose_record, rank_results, ScoreRecord};
use crate::matching::extract::extract_text;
use crate::matching::keywords::{get_feedback, keyword_score};
use crate::matching::semantic::{semantic_score, Embedder};
use crate::matching::tokens::{normalize_words, TokenSet};

/// An uploaded resume. Lives only for the duration of one request.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Scores one resume's extracted text against the JD.
pub async fn score_resume_text(
    embedder: &dyn Embedder,
    jd_text: &str,
    jd_tokens: &TokenSet,
    candidate_name: String,
    resume_text: &str,
    single_resume: bool,
) -> Result<ScoreRecord, AppError> {
    let resume_tokens = normalize_words(resume_text);

    let semantic = semantic_score(embedder, jd_text, resume_text).await?;
    let keyword = keyword_score(jd_tokens, &resume_tokens);
    let feedback = get_feedback(jd_tokens, &resume_tokens);
    let bias_audit = audit_bias(resume_text);

    let record = compose_record(
        candidate_name,
        semantic,
        keyword,
        feedback,
        bias_audit,
        single_resume,
    );
    debug!(
        "Scored {}: semantic={} keyword={} combined={}",
        record.candidate_name, record.semantic_score, record.keyword_score, record.combined_score
    );
    Ok(record)
}

/// Extracts and scores every document, then ranks by combined score.
///
/// Any failing document fails the whole batch. A blank JD is valid and gives
/// every resume a keyword score of 0.0.
pub async fn score_batch(
    embedder: &dyn Embedder,
    jd_text: &str,
    documents: Vec<Document>,
) -> Result<Vec<ScoreRecord>, AppError> {
    if documents.is_empty() {
        return Err(AppError::Validation(
            "at least one resume file is required".to_string(),
        ));
    }

    let jd_tokens = normalize_words(jd_text);
    let single_resume = documents.len() == 1;

    let mut records = Vec::with_capacity(documents.len());
    for document in documents {
        let resume_text = extract_text(&document.file_name, document.bytes).await?;
        let record = score_resume_text(
            embedder,
            jd_text,
            &jd_tokens,
            document.file_name,
            &resume_text,
            single_resume,
        )
        .await?;
        records.push(record);
    }

    rank_results(&mut records);
    Ok(records)
}
