// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Etapas do pipeline de PDF, para saber ONDE o navegador falhou.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Request,
    Launch,
    Content,
    Print,
    Timeout,
    Response,
}

impl RenderStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStage::Request => "request",
            RenderStage::Launch => "launch",
            RenderStage::Content => "content",
            RenderStage::Print => "print",
            RenderStage::Timeout => "timeout",
            RenderStage::Response => "response",
        }
    }
}

impl std::fmt::Display for RenderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Falha ao gerar PDF na etapa '{stage}': {message}")]
pub struct RenderError {
    pub stage: RenderStage,
    pub message: String,
}

impl RenderError {
    pub fn new(stage: RenderStage, message: impl ToString) -> Self {
        Self { stage, message: message.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    // (a) Rede ou status HTTP de erro vindo da API externa
    #[error("Falha de comunicação com a API: {0}")]
    Transport(#[from] reqwest::Error),

    // (b) A API respondeu, mas não no formato esperado (ex: objeto no lugar de lista)
    #[error("Resposta inesperada da API em '{endpoint}': {detail}")]
    MalformedResponse { endpoint: String, detail: String },

    // (c) Validação do formulário
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Campo desconhecido: {0}")]
    UnknownField(String),

    #[error("Valor inválido para o campo '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    #[error("Nenhum formulário aberto para esta ação")]
    NoActiveForm,

    // (d) Pipeline de PDF
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    pub fn malformed(endpoint: &str, detail: impl ToString) -> Self {
        AppError::MalformedResponse {
            endpoint: endpoint.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Render(err) => {
                tracing::error!("Erro ao gerar PDF: {}", err);
                let body = Json(json!({
                    "error": "Failed to generate PDF",
                    "stage": err.stage.as_str(),
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            AppError::UnknownField(_) | AppError::InvalidFieldValue { .. } => {
                (StatusCode::BAD_REQUEST, "Campo inválido.")
            }
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
