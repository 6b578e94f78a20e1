// src/services/table_view.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    customer::Customer,
    product::{Product, StockStatus, StockThresholds},
};

/// Projeção pura de uma lista em linhas de tabela. Nada aqui é guardado:
/// os badges são recalculados a cada renderização.
pub trait TableView {
    type Entity;
    type Row: Serialize;

    fn headers(&self) -> &'static [&'static str];

    fn project(&self, entity: &Self::Entity) -> Self::Row;

    fn render(&self, items: &[Self::Entity]) -> Vec<Self::Row> {
        items.iter().map(|item| self.project(item)).collect()
    }
}

// Célula de imagem: sem URL mostra o badge "No Image"; com URL leva o
// placeholder estático para o caso do carregamento falhar no navegador.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImageCell {
    Image { src: String, fallback: String },
    NoImage,
}

impl ImageCell {
    pub fn resolve(image: Option<&str>, placeholder: &str) -> Self {
        match image.map(str::trim) {
            Some(src) if !src.is_empty() => ImageCell::Image {
                src: src.to_string(),
                fallback: placeholder.to_string(),
            },
            _ => ImageCell::NoImage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockBadge {
    pub status: StockStatus,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<StockStatus> for StockBadge {
    fn from(status: StockStatus) -> Self {
        Self { status, label: status.label(), color: status.color() }
    }
}

// --- Produtos ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: i64,
    pub sku: String,
    pub image: ImageCell,
    pub product_name: String,
    pub category: String,
    pub quantity: i64,
    pub cost: Decimal,
    pub price: Decimal,
    pub max_discount: Decimal,
    pub stock: StockBadge,
}

#[derive(Debug, Clone)]
pub struct ProductTable {
    pub thresholds: StockThresholds,
    pub image_placeholder: String,
}

impl TableView for ProductTable {
    type Entity = Product;
    type Row = ProductRow;

    fn headers(&self) -> &'static [&'static str] {
        &[
            "SKU",
            "Product Image",
            "Product Name",
            "Category",
            "Quantity",
            "Cost Price",
            "Selling Price",
            "Max Discount",
            "Stock Status",
        ]
    }

    fn project(&self, product: &Product) -> ProductRow {
        ProductRow {
            id: product.id,
            sku: product.sku.clone(),
            image: ImageCell::resolve(product.image.as_deref(), &self.image_placeholder),
            product_name: product.product_name.clone(),
            category: product.category.clone(),
            quantity: product.int_qty,
            cost: product.cost,
            price: product.price,
            max_discount: product.max_discount,
            stock: self.thresholds.classify(product.int_qty).into(),
        }
    }
}

// --- Inventário (somente leitura, preços formatados) ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub sku: String,
    pub product_name: String,
    pub image: ImageCell,
    pub category: String,
    pub available_quantity: i64,
    pub cost_price: String,
    pub selling_price: String,
    pub stock: StockBadge,
}

#[derive(Debug, Clone)]
pub struct InventoryTable {
    pub thresholds: StockThresholds,
    pub image_placeholder: String,
}

impl TableView for InventoryTable {
    type Entity = Product;
    type Row = InventoryRow;

    fn headers(&self) -> &'static [&'static str] {
        &[
            "SKU",
            "Product Name",
            "Product Image",
            "Category",
            "Available Quantity",
            "Cost Price",
            "Selling Price",
            "Stock Status",
        ]
    }

    fn project(&self, product: &Product) -> InventoryRow {
        InventoryRow {
            sku: product.sku.clone(),
            product_name: product.product_name.clone(),
            image: ImageCell::resolve(product.image.as_deref(), &self.image_placeholder),
            category: product.category.clone(),
            available_quantity: product.int_qty,
            cost_price: format!("${:.2}", product.cost),
            selling_price: format!("${:.2}", product.price),
            stock: self.thresholds.classify(product.int_qty).into(),
        }
    }
}

// --- Clientes ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub code: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerTable;

impl TableView for CustomerTable {
    type Entity = Customer;
    type Row = CustomerRow;

    fn headers(&self) -> &'static [&'static str] {
        &[
            "Customer Code",
            "Customer Name",
            "Email",
            "Contact",
            "Address",
            "City",
            "Country",
        ]
    }

    fn project(&self, customer: &Customer) -> CustomerRow {
        CustomerRow {
            code: customer.code.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            contact: customer.contact.clone(),
            address: customer.address.clone(),
            city: customer.city.clone(),
            country: customer.country.clone(),
        }
    }
}
