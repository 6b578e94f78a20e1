// src/services/customer_screen.rs

use crate::{
    common::error::AppError,
    models::{
        country::{is_known_country, COUNTRIES},
        customer::{Customer, CustomerDraft},
    },
    repo::{CustomerRepository, EntityRepository},
    services::{
        crud_screen::CrudScreen,
        table_view::{CustomerRow, CustomerTable, TableView},
    },
};

pub struct CustomerScreen<R = CustomerRepository>
where
    R: EntityRepository<Entity = Customer, Draft = CustomerDraft>,
{
    pub crud: CrudScreen<R>,
    table: CustomerTable,
}

impl<R> CustomerScreen<R>
where
    R: EntityRepository<Entity = Customer, Draft = CustomerDraft>,
{
    pub fn new(repo: R) -> Self {
        Self { crud: CrudScreen::new(repo), table: CustomerTable }
    }

    pub fn country_options(&self) -> &'static [&'static str] {
        COUNTRIES
    }

    // País fora da lista fica sem seleção no select, mas o valor é mantido
    pub fn selected_country(&self) -> Option<&str> {
        let country = self.crud.form().draft().country.as_str();
        is_known_country(country).then_some(country)
    }

    pub fn select_country(&mut self, name: &str) -> Result<(), AppError> {
        self.crud.set_field("country", name)
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.table.headers()
    }

    pub fn rows(&self) -> Vec<CustomerRow> {
        self.table.render(self.crud.items())
    }
}
