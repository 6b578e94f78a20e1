// src/services/product_screen.rs

use crate::{
    common::error::AppError,
    models::product::{ImageUpload, Product, ProductDraft},
    repo::{CategoryRepository, EntityRepository, ProductRepository},
    services::{
        crud_screen::CrudScreen,
        table_view::{InventoryRow, InventoryTable, ProductRow, ProductTable, TableView},
    },
};

// Tela de produtos: CRUD genérico + categorias + upload de imagem
pub struct ProductScreen<R = ProductRepository>
where
    R: EntityRepository<Entity = Product, Draft = ProductDraft>,
{
    pub crud: CrudScreen<R>,
    categories: Vec<String>,
    table: ProductTable,
}

impl<R> ProductScreen<R>
where
    R: EntityRepository<Entity = Product, Draft = ProductDraft>,
{
    pub fn new(repo: R, table: ProductTable) -> Self {
        Self { crud: CrudScreen::new(repo), categories: Vec::new(), table }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    // Falha mantém as categorias anteriores
    pub async fn load_categories(&mut self, repo: &CategoryRepository) -> Result<(), AppError> {
        match repo.list_names().await {
            Ok(names) => {
                self.categories = names;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Erro ao carregar categorias: {}", e);
                Err(e)
            }
        }
    }

    pub fn select_category(&mut self, name: &str) -> Result<(), AppError> {
        self.crud.set_field("category", name)
    }

    pub fn select_image(&mut self, upload: Option<ImageUpload>) {
        self.crud.form_mut().draft_mut().select_image(upload);
    }

    pub fn toggle_max_discount(&mut self) {
        self.crud.form_mut().draft_mut().toggle_max_discount();
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.table.headers()
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.table.render(self.crud.items())
    }
}

// Inventário: mesma lista de produtos, só leitura
pub struct InventoryScreen<R = ProductRepository>
where
    R: EntityRepository<Entity = Product, Draft = ProductDraft>,
{
    crud: CrudScreen<R>,
    table: InventoryTable,
}

impl<R> InventoryScreen<R>
where
    R: EntityRepository<Entity = Product, Draft = ProductDraft>,
{
    pub fn new(repo: R, table: InventoryTable) -> Self {
        Self { crud: CrudScreen::new(repo), table }
    }

    pub async fn reload(&mut self) -> Result<(), AppError> {
        self.crud.reload().await
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.table.headers()
    }

    pub fn rows(&self) -> Vec<InventoryRow> {
        self.table.render(self.crud.items())
    }
}
