// src/repo/document_repo.rs

use crate::{
    common::error::AppError,
    config::ApiEndpoints,
    models::document::GeneratePdfRequest,
    repo::api_client::ApiClient,
};

// Lado cliente do gerador de PDF (usado pela tela de fatura)
#[derive(Clone)]
pub struct DocumentRepository {
    client: ApiClient,
    endpoints: ApiEndpoints,
}

impl DocumentRepository {
    pub fn new(client: ApiClient, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn generate_pdf(&self, html_content: &str, invoice_id: &str) -> Result<Vec<u8>, AppError> {
        let request = GeneratePdfRequest {
            html_content: html_content.to_string(),
            invoice_id: invoice_id.to_string(),
        };

        let pdf = self.client.post_for_bytes(&self.endpoints.generate_pdf, &request).await?;
        tracing::info!("PDF da fatura {} recebido ({} bytes)", invoice_id, pdf.len());
        Ok(pdf)
    }
}
