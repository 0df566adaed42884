//! Axum route handler for the matching API.

use axum::{
    extract::{multipart::Field, Multipart, State},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::composer::ScoreRecord;
use crate::matching::pipeline::{score_batch, Document};
use crate::matching::uploads::{sanitize_file_name, save_upload};
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

/// Parsed multipart form of a match request.
#[derive(Debug, Default)]
pub struct MatchForm {
    pub job_description: Option<String>,
    pub documents: Vec<Document>,
}

/// POST /match
///
/// Multipart form: `job_description` text plus one or more `resumes` PDF files.
/// Returns every resume's score record, best match first. The form is
/// validated before anything is written to the upload directory.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<ScoreRecord>>, AppError> {
    let form = read_match_form(multipart).await?;
    let job_description = form.job_description.ok_or_else(|| {
        AppError::Validation(format!("{JOB_DESCRIPTION_FIELD} field is required"))
    })?;
    if form.documents.is_empty() {
        return Err(AppError::Validation(format!(
            "at least one {RESUMES_FIELD} file is required"
        )));
    }

    for document in &form.documents {
        save_upload(&state.config.upload_dir, &document.file_name, &document.bytes).await?;
    }

    let resume_count = form.documents.len();
    let records = score_batch(state.embedder.as_ref(), &job_description, form.documents).await?;
    info!("Scored {resume_count} resume(s) against job description");

    Ok(Json(records))
}

async fn read_match_form(mut multipart: Multipart) -> Result<MatchForm, AppError> {
    let mut form = MatchForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Unreadable {JOB_DESCRIPTION_FIELD}: {e}"))
                })?;
                form.job_description = Some(text);
            }
            Some(RESUMES_FIELD) => form.documents.push(read_document(field).await?),
            other => debug!("Ignoring unexpected multipart field {other:?}"),
        }
    }

    Ok(form)
}

async fn read_document(field: Field<'_>) -> Result<Document, AppError> {
    let file_name = field
        .file_name()
        .and_then(sanitize_file_name)
        .map(str::to_owned)
        .ok_or_else(|| AppError::Validation("every resume upload needs a file name".to_string()))?;
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read upload '{file_name}': {e}")))?;

    Ok(Document { file_name, bytes })
}
