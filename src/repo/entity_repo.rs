// src/repo/entity_repo.rs

use async_trait::async_trait;

use crate::{common::error::AppError, services::form::Draft};

/// Contrato comum dos clientes de entidade (produtos, clientes...).
///
/// Cada operação é um único round trip para um endpoint fixo. Nenhuma delas
/// faz cache: a tela sempre recarrega a lista depois de uma mutação.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    type Entity: Clone + Send + Sync + 'static;
    type Draft: Draft<Entity = Self::Entity> + Send + Sync + 'static;

    async fn list(&self) -> Result<Vec<Self::Entity>, AppError>;

    /// Rascunho inicial do formulário de criação.
    async fn new_draft(&self) -> Result<Self::Draft, AppError> {
        Ok(Self::Draft::default())
    }

    /// Devolve o registro criado quando a API o ecoa no corpo.
    async fn create(&self, draft: &Self::Draft) -> Result<Option<Self::Entity>, AppError>;

    async fn update(
        &self,
        current: &Self::Entity,
        draft: &Self::Draft,
    ) -> Result<Option<Self::Entity>, AppError>;

    async fn delete(&self, entity: &Self::Entity) -> Result<(), AppError>;
}
