// src/repo/customer_repo.rs

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::{
    common::error::AppError,
    config::ApiEndpoints,
    models::customer::{
        Customer, CustomerDraft, DeleteCustomerPayload, EntryCodeRequest, NewCustomerPayload,
        CUSTOMER_CODE_TYPE,
    },
    repo::{
        api_client::{decode_echo, ApiClient},
        entity_repo::EntityRepository,
    },
};

#[derive(Clone)]
pub struct CustomerRepository {
    client: ApiClient,
    endpoints: ApiEndpoints,
}

impl CustomerRepository {
    pub fn new(client: ApiClient, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Próximo código livre para o tipo de documento informado.
    pub async fn next_entry_code(&self, code_type: i32) -> Result<String, AppError> {
        let path = &self.endpoints.get_next_entry_code;
        let body = self
            .client
            .send_json(Method::POST, path, &EntryCodeRequest { code_type })
            .await?;

        match body {
            Value::String(code) if !code.trim().is_empty() => Ok(code.trim().to_string()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(AppError::malformed(path, format!("código inválido: {}", other))),
        }
    }
}

#[async_trait]
impl EntityRepository for CustomerRepository {
    type Entity = Customer;
    type Draft = CustomerDraft;

    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let customers = self.client.get_list(&self.endpoints.get_customers).await?;
        tracing::info!("Clientes carregados: {}", customers.len());
        Ok(customers)
    }

    // O formulário de criação já abre com o código reservado no servidor
    async fn new_draft(&self) -> Result<CustomerDraft, AppError> {
        let code = self.next_entry_code(CUSTOMER_CODE_TYPE).await?;
        Ok(CustomerDraft { code, ..CustomerDraft::default() })
    }

    async fn create(&self, draft: &CustomerDraft) -> Result<Option<Customer>, AppError> {
        let echo = self
            .client
            .send_json(Method::POST, &self.endpoints.add_customer, &NewCustomerPayload::from(draft))
            .await?;

        tracing::info!("Cliente {} adicionado", draft.code);
        Ok(decode_echo(echo))
    }

    async fn update(
        &self,
        current: &Customer,
        draft: &CustomerDraft,
    ) -> Result<Option<Customer>, AppError> {
        let echo = self
            .client
            .send_json(Method::PUT, &self.endpoints.update_customer, draft)
            .await?;

        tracing::info!("Cliente {} atualizado", current.code);
        Ok(decode_echo(echo))
    }

    async fn delete(&self, customer: &Customer) -> Result<(), AppError> {
        self.client
            .send_json(
                Method::POST,
                &self.endpoints.delete_customer,
                &DeleteCustomerPayload { customers: customer },
            )
            .await?;

        tracing::info!("Cliente {} removido", customer.code);
        Ok(())
    }
}
