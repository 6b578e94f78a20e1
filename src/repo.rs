pub mod api_client;
pub use api_client::ApiClient;
pub mod entity_repo;
pub use entity_repo::EntityRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod category_repo;
pub use category_repo::CategoryRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod sales_repo;
pub use sales_repo::SalesRepository;
pub mod document_repo;
pub use document_repo::DocumentRepository;
