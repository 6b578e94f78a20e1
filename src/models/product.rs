// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{common::error::AppError, services::form::Draft};

// --- 1. Produto (como a API devolve) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // A tela de inventário recebe produtos sem id, por isso o default
    #[serde(default)]
    pub id: i64,
    pub sku: String,
    pub product_name: String,
    pub category: String,
    pub int_qty: i64,
    pub cost: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub max_discount: Decimal,
}

// --- 2. Categoria (apenas lookup para o campo `category`) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "Category")]
    pub name: String,
    pub status: i32,
}

#[derive(Debug, Deserialize)]
pub struct CategoryEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Category>,
}

// --- 3. Status de estoque ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    OutOfStock,
    LowInStock,
    InStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowInStock => "Low in Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    // Cor do chip na tabela
    pub fn color(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "danger",
            StockStatus::LowInStock => "warning",
            StockStatus::InStock => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockThresholds {
    pub out_of_stock: i64,
    pub low_stock: i64,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self { out_of_stock: 0, low_stock: 50 }
    }
}

impl StockThresholds {
    /// Igualdade exata com `out_of_stock` vem primeiro; depois qualquer valor
    /// abaixo de `low_stock` é "baixo". `low_stock` em si já conta como em estoque.
    pub fn classify(&self, quantity: i64) -> StockStatus {
        if quantity == self.out_of_stock {
            StockStatus::OutOfStock
        } else if quantity < self.low_stock {
            StockStatus::LowInStock
        } else {
            StockStatus::InStock
        }
    }
}

// --- 4. Rascunho do formulário de produto ---

// Arquivo escolhido no formulário, ainda não enviado
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub sku: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    pub quantity: i64,
    pub cost: Decimal,
    pub price: Decimal,
    pub max_discount: Decimal,

    // URL final da imagem (ou a existente, na edição). Vazio = sem imagem.
    pub image: String,

    #[serde(skip)]
    pub pending_image: Option<ImageUpload>,

    #[serde(skip)]
    pub show_max_discount: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            category: String::new(),
            quantity: 0,
            cost: Decimal::ZERO,
            price: Decimal::ZERO,
            max_discount: Decimal::ZERO,
            image: String::new(),
            pending_image: None,
            show_max_discount: false,
        }
    }
}

impl ProductDraft {
    pub fn select_image(&mut self, upload: Option<ImageUpload>) {
        self.pending_image = upload;
    }

    pub fn toggle_max_discount(&mut self) {
        self.show_max_discount = !self.show_max_discount;
    }
}

impl Draft for ProductDraft {
    type Entity = Product;

    fn from_entity(product: &Product) -> Self {
        Self {
            sku: product.sku.clone(),
            name: product.product_name.clone(),
            category: product.category.clone(),
            quantity: product.int_qty,
            cost: product.cost,
            price: product.price,
            max_discount: product.max_discount,
            image: product.image.clone().unwrap_or_default(),
            pending_image: None,
            show_max_discount: false,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        match name {
            "sku" => self.sku = value.to_string(),
            "name" => self.name = value.to_string(),
            "category" => self.category = value.to_string(),
            "quantity" => self.quantity = parse_integer(name, value)?,
            "cost" => self.cost = parse_decimal(name, value)?,
            "price" => self.price = parse_decimal(name, value)?,
            "maxDiscount" => self.max_discount = parse_decimal(name, value)?,
            other => return Err(AppError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

// Corpo do PUT: os campos do formulário + o id do produto
#[derive(Debug, Serialize)]
pub struct UpdateProductPayload<'a> {
    #[serde(flatten)]
    pub draft: &'a ProductDraft,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductPayload {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

pub(crate) fn parse_decimal(field: &str, value: &str) -> Result<Decimal, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    trimmed.parse::<Decimal>().map_err(|_| AppError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// Fora da faixa do tipo de destino também é valor inválido
pub(crate) fn parse_integer<T>(field: &str, value: &str) -> Result<T, AppError>
where
    T: std::str::FromStr + Default,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse::<T>().map_err(|_| AppError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}
