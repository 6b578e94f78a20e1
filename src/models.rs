pub mod country;
pub mod customer;
pub mod dashboard;
pub mod document;
pub mod product;
