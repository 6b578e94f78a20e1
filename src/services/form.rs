// src/services/form.rs

use validator::Validate;

use crate::common::error::AppError;

/// Rascunho editável de uma entidade (formulário de criação/edição).
pub trait Draft: Default + Validate + Clone {
    type Entity;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Atualização genérica por nome de campo, como o `onChange` de um input.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    draft: D,
}

impl<D: Draft> FormState<D> {
    pub fn new() -> Self {
        Self { draft: D::default() }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        self.draft.set_field(name, value)
    }

    pub fn reset(&mut self) {
        self.draft = D::default();
    }

    pub fn replace(&mut self, draft: D) {
        self.draft = draft;
    }

    pub fn load_from(&mut self, entity: &D::Entity) {
        self.draft = D::from_entity(entity);
    }

    // Só os campos obrigatórios são checados; o resto passa
    pub fn check(&self) -> Result<(), AppError> {
        self.draft.validate().map_err(AppError::ValidationError)
    }

    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Formulário inválido: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use super::*;
    use crate::models::{
        customer::{Customer, CustomerDraft},
        product::{Product, ProductDraft},
    };

    #[test]
    fn product_reset_restores_every_default() {
        let mut form = FormState::<ProductDraft>::new();
        form.set_field("sku", "SKU-1").unwrap();
        form.set_field("name", "Widget").unwrap();
        form.set_field("category", "Tools").unwrap();
        form.set_field("quantity", "5").unwrap();
        form.set_field("cost", "2.5").unwrap();
        form.set_field("price", "4").unwrap();
        form.set_field("maxDiscount", "10").unwrap();
        form.draft_mut().toggle_max_discount();

        form.reset();

        let draft = form.draft();
        assert_eq!(draft.sku, "");
        assert_eq!(draft.name, "");
        assert_eq!(draft.category, "");
        assert_eq!(draft.quantity, 0);
        assert_eq!(draft.cost, Decimal::ZERO);
        assert_eq!(draft.price, Decimal::ZERO);
        assert_eq!(draft.max_discount, Decimal::ZERO);
        assert_eq!(draft.image, "");
        assert!(draft.pending_image.is_none());
        assert!(!draft.show_max_discount);
    }

    #[test]
    fn customer_reset_defaults_country_to_sri_lanka() {
        let mut form = FormState::<CustomerDraft>::new();
        form.set_field("name", "Nimal").unwrap();
        form.set_field("country", "India").unwrap();
        form.set_field("status", "1").unwrap();

        form.reset();

        let draft = form.draft();
        assert_eq!(draft.code, "");
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.contact, "");
        assert_eq!(draft.address, "");
        assert_eq!(draft.city, "");
        assert_eq!(draft.country, "Sri Lanka");
        assert_eq!(draft.status, 0);
    }

    #[test]
    fn product_requires_name_and_category() {
        let mut form = FormState::<ProductDraft>::new();
        assert!(!form.validate());

        form.set_field("name", "Widget").unwrap();
        assert!(!form.validate());

        form.set_field("category", "Tools").unwrap();
        assert!(form.validate());
    }

    #[test]
    fn validation_fails_open_on_ranges_and_formats() {
        let mut form = FormState::<ProductDraft>::new();
        form.set_field("name", "Widget").unwrap();
        form.set_field("category", "Tools").unwrap();
        form.set_field("quantity", "-4").unwrap();
        form.set_field("maxDiscount", "250").unwrap();
        assert!(form.validate());

        let mut customer = FormState::<CustomerDraft>::new();
        customer.set_field("name", "Nimal").unwrap();
        customer.set_field("email", "not-an-email").unwrap();
        customer.set_field("country", "Atlantis").unwrap();
        assert!(customer.validate());
    }

    #[test]
    fn set_field_rejects_unknown_names_and_bad_numbers() {
        let mut form = FormState::<ProductDraft>::new();
        assert!(matches!(form.set_field("colour", "red"), Err(AppError::UnknownField(_))));
        assert!(matches!(
            form.set_field("price", "abc"),
            Err(AppError::InvalidFieldValue { .. })
        ));
    }

    #[test]
    fn load_from_seeds_the_draft_for_editing() {
        let product = Product {
            id: 7,
            sku: "SKU-7".into(),
            product_name: "Hammer".into(),
            category: "Tools".into(),
            int_qty: 12,
            cost: Decimal::from_str("3.20").unwrap(),
            price: Decimal::from_str("6.00").unwrap(),
            image: Some("https://cdn.example/hammer.png".into()),
            max_discount: Decimal::from(5),
        };
        let mut form = FormState::<ProductDraft>::new();
        form.load_from(&product);

        assert_eq!(form.draft().name, "Hammer");
        assert_eq!(form.draft().quantity, 12);
        assert_eq!(form.draft().image, "https://cdn.example/hammer.png");

        let customer = Customer {
            code: "CUS-0003".into(),
            name: "Kamala".into(),
            email: "k@example.com".into(),
            contact: "0771234567".into(),
            address: "12 Lake Rd".into(),
            city: "Kandy".into(),
            country: "Sri Lanka".into(),
            status: 1,
        };
        let mut customer_form = FormState::<CustomerDraft>::new();
        customer_form.load_from(&customer);
        assert_eq!(customer_form.draft().code, "CUS-0003");
        assert_eq!(customer_form.draft().status, 1);
    }
}
