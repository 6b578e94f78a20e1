// src/repo/product_repo.rs

use async_trait::async_trait;
use reqwest::{
    Method,
    multipart::{Form, Part},
};

use crate::{
    common::error::AppError,
    config::ApiEndpoints,
    models::product::{
        DeleteProductPayload, ImageUpload, Product, ProductDraft, UpdateProductPayload,
        UploadedImage,
    },
    repo::{
        api_client::{decode_echo, ApiClient},
        entity_repo::EntityRepository,
    },
};

#[derive(Clone)]
pub struct ProductRepository {
    client: ApiClient,
    endpoints: ApiEndpoints,
}

impl ProductRepository {
    pub fn new(client: ApiClient, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    // Envia o arquivo como multipart (campo "image") e devolve a URL pública
    pub async fn upload_image(&self, upload: &ImageUpload) -> Result<String, AppError> {
        let path = &self.endpoints.upload_product_image;
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("image", part);

        let body = self.client.post_multipart(path, form).await?;
        let uploaded: UploadedImage =
            serde_json::from_value(body).map_err(|e| AppError::malformed(path, e))?;

        tracing::info!("Imagem enviada com sucesso: {}", uploaded.url);
        Ok(uploaded.url)
    }

    // Se houver um arquivo pendente, ele vira a nova imagem do produto
    async fn resolve_image(&self, draft: &ProductDraft) -> Result<ProductDraft, AppError> {
        let mut resolved = draft.clone();
        if let Some(upload) = &draft.pending_image {
            resolved.image = self.upload_image(upload).await?;
            resolved.pending_image = None;
        }
        Ok(resolved)
    }
}

#[async_trait]
impl EntityRepository for ProductRepository {
    type Entity = Product;
    type Draft = ProductDraft;

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let products = self.client.get_list(&self.endpoints.get_products).await?;
        tracing::info!("Produtos carregados: {}", products.len());
        Ok(products)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Option<Product>, AppError> {
        let body = self.resolve_image(draft).await?;
        let echo = self
            .client
            .send_json(Method::POST, &self.endpoints.add_product, &body)
            .await?;

        tracing::info!("Produto adicionado: {}", body.name);
        Ok(decode_echo(echo))
    }

    async fn update(
        &self,
        current: &Product,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, AppError> {
        let body = self.resolve_image(draft).await?;
        let payload = UpdateProductPayload { draft: &body, id: current.id };
        let echo = self
            .client
            .send_json(Method::PUT, &self.endpoints.update_product, &payload)
            .await?;

        tracing::info!("Produto {} atualizado", current.id);
        Ok(decode_echo(echo))
    }

    async fn delete(&self, product: &Product) -> Result<(), AppError> {
        self.client
            .send_json(
                Method::DELETE,
                &self.endpoints.delete_product,
                &DeleteProductPayload { id: product.id },
            )
            .await?;

        tracing::info!("Produto {} removido", product.id);
        Ok(())
    }
}
