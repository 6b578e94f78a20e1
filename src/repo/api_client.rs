// src/repo/api_client.rs

use reqwest::{Method, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::common::error::AppError;

// Cliente HTTP compartilhado pelos repositórios. Um round trip por chamada, sem retry.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<Value, AppError> {
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        // Algumas rotas respondem texto puro (ex: o próximo código)
        Ok(serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
    }

    /// GET que precisa devolver uma lista. Qualquer coisa que não seja um
    /// array JSON vira `MalformedResponse`.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = Self::read_body(response).await?;

        if !body.is_array() {
            tracing::error!("Formato inesperado em {}: {}", path, body);
            return Err(AppError::malformed(path, "esperava uma lista"));
        }

        serde_json::from_value(body).map_err(|e| {
            tracing::error!("Falha ao decodificar lista de {}: {}", path, e);
            AppError::malformed(path, e)
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = Self::read_body(response).await?;
        serde_json::from_value(body).map_err(|e| AppError::malformed(path, e))
    }

    pub async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<Value, AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::read_body(response).await
    }

    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Value, AppError> {
        let response = self.http.post(self.url(path)).multipart(form).send().await?;
        Self::read_body(response).await
    }

    // Usado pelo cliente de PDF, que recebe binário
    pub async fn post_for_bytes<B>(&self, path: &str, body: &B) -> Result<Vec<u8>, AppError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

// A API às vezes devolve o registro criado/atualizado, às vezes só uma mensagem.
pub(crate) fn decode_echo<T: DeserializeOwned>(body: Value) -> Option<T> {
    serde_json::from_value(body).ok()
}
