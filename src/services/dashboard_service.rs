// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    models::dashboard::{GroupBy, SalesDashboard},
    repo::SalesRepository,
};

#[derive(Clone)]
pub struct DashboardService {
    repo: SalesRepository,
}

impl DashboardService {
    pub fn new(repo: SalesRepository) -> Self {
        Self { repo }
    }

    pub async fn get_sales_dashboard(&self, group_by: GroupBy) -> Result<SalesDashboard, AppError> {
        let entries = self
            .repo
            .fetch(group_by)
            .await
            .inspect_err(|e| tracing::error!("Erro ao buscar vendas: {}", e))?;

        Ok(SalesDashboard::from_entries(group_by, entries))
    }
}
