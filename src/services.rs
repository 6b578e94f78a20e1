pub mod crud_screen;
pub mod customer_screen;
pub mod dashboard_service;
pub mod form;
pub mod modal;
pub mod pdf_service;
pub mod product_screen;
pub mod table_view;
