// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Documents ---
        handlers::documents::generate_pdf,
    ),
    components(
        schemas(
            models::document::GeneratePdfRequest,
            models::document::PdfErrorBody,
        )
    ),
    tags(
        (name = "Documents", description = "Geração de PDF de faturas a partir de HTML")
    )
)]
pub struct ApiDoc;
