// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    models::product::StockThresholds,
    repo::{
        ApiClient, CategoryRepository, CustomerRepository, DocumentRepository, ProductRepository,
        SalesRepository,
    },
    services::{
        dashboard_service::DashboardService,
        pdf_service::{ChromiumLauncher, PdfService},
        table_view::{InventoryTable, ProductTable},
    },
};

// Caminhos da API externa. Cada repositório recebe isto na construção.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    pub get_products: String,
    pub get_product_categories: String,
    pub add_product: String,
    pub update_product: String,
    pub delete_product: String,
    pub upload_product_image: String,
    pub get_customers: String,
    pub add_customer: String,
    pub update_customer: String,
    pub delete_customer: String,
    pub get_next_entry_code: String,
    pub sales_daily: String,
    pub sales_monthly: String,
    pub sales_yearly: String,
    pub generate_pdf: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            get_products: "/products".into(),
            get_product_categories: "/product-categories".into(),
            add_product: "/products/add".into(),
            update_product: "/products/update".into(),
            delete_product: "/products/delete".into(),
            upload_product_image: "/products/upload-image".into(),
            get_customers: "/customers".into(),
            add_customer: "/customers/add".into(),
            update_customer: "/customers/update".into(),
            delete_customer: "/customers/delete".into(),
            get_next_entry_code: "/entry-codes/next".into(),
            sales_daily: "/sales/daily".into(),
            sales_monthly: "/sales/monthly".into(),
            sales_yearly: "/sales/yearly".into(),
            generate_pdf: "/api/generate-pdf".into(),
        }
    }
}

impl ApiEndpoints {
    fn from_env() -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: String| env::var(key).unwrap_or(default);

        Self {
            get_products: pick("API_GET_PRODUCTS", defaults.get_products),
            get_product_categories: pick("API_GET_PRODUCT_CATEGORIES", defaults.get_product_categories),
            add_product: pick("API_ADD_PRODUCT", defaults.add_product),
            update_product: pick("API_UPDATE_PRODUCT", defaults.update_product),
            delete_product: pick("API_DELETE_PRODUCT", defaults.delete_product),
            upload_product_image: pick("API_UPLOAD_PRODUCT_IMAGE", defaults.upload_product_image),
            get_customers: pick("API_GET_CUSTOMERS", defaults.get_customers),
            add_customer: pick("API_ADD_CUSTOMER", defaults.add_customer),
            update_customer: pick("API_UPDATE_CUSTOMER", defaults.update_customer),
            delete_customer: pick("API_DELETE_CUSTOMER", defaults.delete_customer),
            get_next_entry_code: pick("API_GET_NEXT_ENTRY_CODE", defaults.get_next_entry_code),
            sales_daily: pick("API_SALES_DAILY", defaults.sales_daily),
            sales_monthly: pick("API_SALES_MONTHLY", defaults.sales_monthly),
            sales_yearly: pick("API_SALES_YEARLY", defaults.sales_yearly),
            generate_pdf: pick("API_GENERATE_PDF", defaults.generate_pdf),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfSettings {
    pub max_concurrent_renders: usize,
    pub render_timeout: Duration,
    pub chrome_executable: Option<String>,
    pub no_sandbox: bool,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            max_concurrent_renders: 2,
            render_timeout: Duration::from_secs(30),
            chrome_executable: None,
            no_sandbox: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub endpoints: ApiEndpoints,
    pub thresholds: StockThresholds,
    pub image_placeholder: String,
    pub bind_addr: String,
    pub pdf: PdfSettings,
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} contém um valor inválido: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());

        let defaults = StockThresholds::default();
        let thresholds = StockThresholds {
            out_of_stock: parse_var("OUT_OF_STOCK", defaults.out_of_stock)?,
            low_stock: parse_var("LOW_STOCK", defaults.low_stock)?,
        };

        let pdf_defaults = PdfSettings::default();
        let max_concurrent_renders =
            parse_var("PDF_MAX_CONCURRENT_RENDERS", pdf_defaults.max_concurrent_renders)?;
        if max_concurrent_renders == 0 {
            anyhow::bail!("PDF_MAX_CONCURRENT_RENDERS deve ser maior que zero");
        }
        let timeout_secs = parse_var("PDF_RENDER_TIMEOUT_SECS", pdf_defaults.render_timeout.as_secs())?;

        let pdf = PdfSettings {
            max_concurrent_renders,
            render_timeout: Duration::from_secs(timeout_secs),
            chrome_executable: env::var("CHROME_EXECUTABLE").ok(),
            no_sandbox: parse_var("CHROME_NO_SANDBOX", pdf_defaults.no_sandbox)?,
        };

        Ok(Self {
            api_base_url,
            endpoints: ApiEndpoints::from_env(),
            thresholds,
            image_placeholder: env::var("IMAGE_PLACEHOLDER")
                .unwrap_or_else(|_| "/images/placeholder.png".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            pdf,
        })
    }
}

// --- Montagem dos clientes a partir da configuração explícita ---
impl AppConfig {
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.api_base_url.clone())
    }

    pub fn product_repository(&self) -> ProductRepository {
        ProductRepository::new(self.api_client(), self.endpoints.clone())
    }

    pub fn category_repository(&self) -> CategoryRepository {
        CategoryRepository::new(self.api_client(), self.endpoints.clone())
    }

    pub fn customer_repository(&self) -> CustomerRepository {
        CustomerRepository::new(self.api_client(), self.endpoints.clone())
    }

    pub fn document_repository(&self) -> DocumentRepository {
        DocumentRepository::new(self.api_client(), self.endpoints.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(SalesRepository::new(self.api_client(), self.endpoints.clone()))
    }

    pub fn product_table(&self) -> ProductTable {
        ProductTable {
            thresholds: self.thresholds,
            image_placeholder: self.image_placeholder.clone(),
        }
    }

    pub fn inventory_table(&self) -> InventoryTable {
        InventoryTable {
            thresholds: self.thresholds,
            image_placeholder: self.image_placeholder.clone(),
        }
    }
}

// O estado compartilhado que será acessível nos handlers
#[derive(Clone)]
pub struct AppState {
    pub pdf_service: PdfService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let launcher = ChromiumLauncher::new(config.pdf.clone());
        let pdf_service = PdfService::new(Arc::new(launcher), &config.pdf);

        tracing::info!(
            "✅ Gerador de PDF pronto (máx. {} navegadores simultâneos)",
            config.pdf.max_concurrent_renders
        );

        Self { pdf_service }
    }
}
