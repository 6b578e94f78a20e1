// src/models/customer.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    common::error::AppError,
    models::country::DEFAULT_COUNTRY,
    models::product::parse_integer,
    services::form::Draft,
};

// Código do tipo de documento "cliente" no endpoint de próximo código
pub const CUSTOMER_CODE_TYPE: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub code: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    pub email: String,
    pub contact: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub status: i32,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            email: String::new(),
            contact: String::new(),
            address: String::new(),
            city: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            status: 0,
        }
    }
}

impl Draft for CustomerDraft {
    type Entity = Customer;

    fn from_entity(customer: &Customer) -> Self {
        Self {
            code: customer.code.clone(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            contact: customer.contact.clone(),
            address: customer.address.clone(),
            city: customer.city.clone(),
            country: customer.country.clone(),
            status: customer.status,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        match name {
            "code" => self.code = value.to_string(),
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "contact" => self.contact = value.to_string(),
            "address" => self.address = value.to_string(),
            "city" => self.city = value.to_string(),
            "country" => self.country = value.to_string(),
            "status" => self.status = parse_integer(name, value)?,
            other => return Err(AppError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

// Corpo do POST de criação: o status de um cliente novo é sempre ativo
#[derive(Debug, Serialize)]
pub struct NewCustomerPayload<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub contact: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub status: i32,
}

impl<'a> From<&'a CustomerDraft> for NewCustomerPayload<'a> {
    fn from(draft: &'a CustomerDraft) -> Self {
        Self {
            code: &draft.code,
            name: &draft.name,
            email: &draft.email,
            contact: &draft.contact,
            address: &draft.address,
            city: &draft.city,
            country: &draft.country,
            status: 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteCustomerPayload<'a> {
    pub customers: &'a Customer,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCodeRequest {
    pub code_type: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_outside_i32_range_is_rejected() {
        let mut draft = CustomerDraft::default();

        let result = draft.set_field("status", "3000000000");

        assert!(matches!(
            result,
            Err(AppError::InvalidFieldValue { ref field, .. }) if field == "status"
        ));
        assert_eq!(draft.status, 0);
    }

    #[test]
    fn status_accepts_small_integers_and_blank() {
        let mut draft = CustomerDraft::default();
        draft.set_field("status", "1").unwrap();
        assert_eq!(draft.status, 1);

        draft.set_field("status", "").unwrap();
        assert_eq!(draft.status, 0);
    }

    #[test]
    fn new_customer_payload_is_always_active() {
        let draft = CustomerDraft { code: "CUS-0001".into(), name: "Nimal".into(), ..Default::default() };
        let value = serde_json::to_value(NewCustomerPayload::from(&draft)).unwrap();
        assert_eq!(value["status"], 1);
        assert_eq!(value["country"], "Sri Lanka");
    }
}
