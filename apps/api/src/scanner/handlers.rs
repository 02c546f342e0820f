//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::models::report::{AnalysisMode, ScoreResult};
use crate::state::AppState;
use crate::taxonomy::SkillTaxonomy;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub mode: Option<AnalysisMode>,
}

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
const MODE_FIELD: &str = "mode";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores raw resume text, optionally against a job description.
/// Empty text is valid input and yields a low score with warnings.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let job_description = request.job_description.as_deref();
    let mode = AnalysisMode::resolve(request.mode, job_description.is_some());

    let result = state
        .scanner
        .analyze(&request.resume_text, job_description, mode);

    info!(score = result.score, ?mode, "Scored resume text");
    Ok(Json(result))
}

/// POST /api/v1/ats/upload
///
/// Multipart form: `resume` (pdf, docx or txt file), optional `job_description`
/// text, optional `mode`. The document is rejected before scoring if its format is
/// unsupported or its text cannot be extracted.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResult>, AppError> {
    let mut resume: Option<(String, bytes::Bytes)> = None;
    let mut job_description: Option<String> = None;
    let mut mode: Option<AnalysisMode> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                resume = Some((file_name, field.bytes().await?));
            }
            Some(JOB_DESCRIPTION_FIELD) => job_description = Some(field.text().await?),
            Some(MODE_FIELD) => mode = Some(parse_mode(&field.text().await?)?),
            _ => {}
        }
    }

    let (file_name, bytes) = resume
        .ok_or_else(|| AppError::Validation(format!("'{RESUME_FIELD}' file field is required")))?;

    let format = DocumentFormat::from_file_name(&file_name)?;
    let resume_text = extract_text(format, bytes).await?;

    let job_description = job_description.as_deref();
    let mode = AnalysisMode::resolve(mode, job_description.is_some());
    let result = state.scanner.analyze(&resume_text, job_description, mode);

    info!(
        file_name = %file_name,
        ?format,
        score = result.score,
        ?mode,
        "Scored uploaded resume"
    );
    Ok(Json(result))
}

/// GET /api/v1/ats/taxonomy
///
/// The skill catalog the scanner matches against.
pub async fn handle_taxonomy(State(state): State<AppState>) -> Json<SkillTaxonomy> {
    Json(state.scanner.taxonomy().clone())
}

fn parse_mode(raw: &str) -> Result<AnalysisMode, AppError> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string())).map_err(|_| {
        AppError::Validation(format!(
            "mode must be 'baseline' or 'job_match', got '{}'",
            raw.trim()
        ))
    })
}
