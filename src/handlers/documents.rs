// src/handlers/documents.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    common::error::{AppError, RenderError, RenderStage},
    config::AppState,
    models::document::{GeneratePdfRequest, PdfErrorBody},
};

// POST /api/generate-pdf
#[utoipa::path(
    post,
    path = "/api/generate-pdf",
    tag = "Documents",
    request_body = GeneratePdfRequest,
    responses(
        (status = 200, description = "PDF gerado", content_type = "application/pdf", body = Vec<u8>),
        (status = 500, description = "Falha em alguma etapa do render", body = PdfErrorBody)
    )
)]
pub async fn generate_pdf(
    State(app_state): State<AppState>,
    payload: Result<Json<GeneratePdfRequest>, JsonRejection>,
) -> Result<Response, AppError> {

    // Corpo inválido também é uma falha do gerador (500), como as demais etapas
    let Json(request) =
        payload.map_err(|e| RenderError::new(RenderStage::Request, e.body_text()))?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename={}", request.file_name()))
        .map_err(|e| RenderError::new(RenderStage::Response, e))?;

    tracing::info!("Gerando PDF da fatura {}", request.invoice_id);

    let pdf_bytes = app_state
        .pdf_service
        .render(request.html_content)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
        (header::CONTENT_DISPOSITION, disposition),
    ];

    Ok((headers, pdf_bytes).into_response())
}
