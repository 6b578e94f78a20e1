// src/repo/category_repo.rs

use crate::{
    common::error::AppError,
    config::ApiEndpoints,
    models::product::{Category, CategoryEnvelope},
    repo::api_client::ApiClient,
};

#[derive(Clone)]
pub struct CategoryRepository {
    client: ApiClient,
    endpoints: ApiEndpoints,
}

impl CategoryRepository {
    pub fn new(client: ApiClient, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        let path = &self.endpoints.get_product_categories;
        let envelope: CategoryEnvelope = self.client.get_json(path).await?;

        if !envelope.success {
            tracing::error!("API de categorias respondeu sem sucesso");
            return Err(AppError::malformed(path, "success = false"));
        }

        tracing::info!("Categorias carregadas: {}", envelope.data.len());
        Ok(envelope.data)
    }

    // Só os nomes interessam para o select do formulário
    pub async fn list_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.list().await?.into_iter().map(|c| c.name).collect())
    }
}
