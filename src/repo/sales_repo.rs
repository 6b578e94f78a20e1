// src/repo/sales_repo.rs

use crate::{
    common::error::AppError,
    config::ApiEndpoints,
    models::dashboard::{GroupBy, SalesEntry, SalesResponse},
    repo::api_client::ApiClient,
};

#[derive(Clone)]
pub struct SalesRepository {
    client: ApiClient,
    endpoints: ApiEndpoints,
}

impl SalesRepository {
    pub fn new(client: ApiClient, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    fn path_for(&self, group_by: GroupBy) -> &str {
        match group_by {
            GroupBy::Daily => &self.endpoints.sales_daily,
            GroupBy::Monthly => &self.endpoints.sales_monthly,
            GroupBy::Yearly => &self.endpoints.sales_yearly,
        }
    }

    pub async fn fetch(&self, group_by: GroupBy) -> Result<Vec<SalesEntry>, AppError> {
        let response: SalesResponse = self.client.get_json(self.path_for(group_by)).await?;
        Ok(response.into_entries())
    }
}
