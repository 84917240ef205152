//! Axum route handlers for the ATS API.

use axum::{
    extract::{Multipart, State},
    Form, Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::entities::extract_entities;
use crate::analysis::formatting::analyze_formatting;
use crate::analysis::pipeline::scan_document;
use crate::ats::upload::read_upload_form;
use crate::errors::AppError;
use crate::models::scan::{ExtractKeywordsResponse, ParseResumeResponse, ScanResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsForm {
    pub job_description: String,
}

/// POST /api/v1/ats/scan
///
/// Decodes the uploaded resume, scores it and, when a job description is
/// supplied, measures keyword coverage against it.
pub async fn handle_scan(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let form = read_upload_form(multipart, state.config.max_upload_bytes).await?;
    let scan_id = Uuid::new_v4();

    info!(
        %scan_id,
        filename = %form.resume.filename,
        bytes = form.resume.content.len(),
        has_job_description = form.job_description.is_some(),
        "Scanning resume"
    );

    let document = state
        .decoder
        .decode(form.resume.content, &form.resume.filename)
        .await?;
    let report = scan_document(&document, form.job_description.as_deref());

    info!(%scan_id, ats_score = report.score.total_score, "Resume scanned");

    Ok(Json(ScanResponse::from_report(scan_id, report, &document.text)))
}

/// POST /api/v1/ats/parse-resume
///
/// Returns the decoded text with every extracted entity and the formatting analysis.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let form = read_upload_form(multipart, state.config.max_upload_bytes).await?;
    info!(filename = %form.resume.filename, "Parsing resume");

    let document = state
        .decoder
        .decode(form.resume.content, &form.resume.filename)
        .await?;
    let extracted_data = extract_entities(&document.text);
    let formatting_analysis = analyze_formatting(&document);

    Ok(Json(ParseResumeResponse {
        sections_found: formatting_analysis.sections_found.clone(),
        raw_text: document.text,
        extracted_data,
        formatting_analysis,
    }))
}

/// POST /api/v1/ats/extract-keywords
///
/// Lists the skills, titles and certifications found in a job description.
pub async fn handle_extract_keywords(
    Form(form): Form<ExtractKeywordsForm>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    if form.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let entities = extract_entities(&form.job_description);
    info!(
        skills = entities.skills.len(),
        job_titles = entities.job_titles.len(),
        "Extracted job description keywords"
    );

    Ok(Json(entities.into()))
}
