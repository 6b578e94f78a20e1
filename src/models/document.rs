// src/models/document.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratePdfRequest {
    #[serde(rename = "htmlContent")]
    #[schema(example = "<h1>Invoice INV-0001</h1><p>Total: 120.00</p>")]
    pub html_content: String,

    #[serde(rename = "invoiceID")]
    #[schema(example = "INV-0001")]
    pub invoice_id: String,
}

impl GeneratePdfRequest {
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.invoice_id)
    }
}

// Corpo das respostas 500 do gerador
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PdfErrorBody {
    #[schema(example = "Failed to generate PDF")]
    pub error: String,
    #[schema(example = "content")]
    pub stage: Option<String>,
}
