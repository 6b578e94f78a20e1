use rust_decimal::Decimal;
use serde_json::json;
use wiremock::{
    matchers::{body_json, body_partial_json, header_regex, method, path},
    Mock, MockServer, ResponseTemplate,
};

use storefront_admin::{
    common::error::AppError,
    config::ApiEndpoints,
    models::{
        customer::{Customer, CustomerDraft},
        dashboard::GroupBy,
        product::{ImageUpload, Product, ProductDraft},
    },
    repo::{
        ApiClient, CategoryRepository, CustomerRepository, DocumentRepository, EntityRepository,
        ProductRepository, SalesRepository,
    },
    services::dashboard_service::DashboardService,
};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri())
}

fn widget_draft() -> ProductDraft {
    ProductDraft {
        name: "Widget".into(),
        category: "Tools".into(),
        quantity: 5,
        cost: Decimal::from(2),
        price: Decimal::from(4),
        ..ProductDraft::default()
    }
}

#[tokio::test]
async fn products_are_listed_from_an_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "sku": "SKU-1", "productName": "Widget", "category": "Tools",
              "intQty": 5, "cost": 2, "price": 4.5, "image": "", "maxDiscount": 0 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    let products = repo.list().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_name, "Widget");
    assert_eq!(products[0].int_qty, 5);
}

#[tokio::test]
async fn non_array_list_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    let result = repo.list().await;

    assert!(matches!(result, Err(AppError::MalformedResponse { .. })));
}

#[tokio::test]
async fn server_errors_surface_as_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = CustomerRepository::new(client(&server), ApiEndpoints::default());
    assert!(matches!(repo.list().await, Err(AppError::Transport(_))));
}

#[tokio::test]
async fn create_without_upload_sends_an_empty_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_json(json!({
            "sku": "", "name": "Widget", "category": "Tools", "quantity": 5,
            "cost": 2.0, "price": 4.0, "maxDiscount": 0.0, "image": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    let echo = repo.create(&widget_draft()).await.unwrap();

    // A resposta não é um produto, então não há eco
    assert!(echo.is_none());
}

#[tokio::test]
async fn pending_image_is_uploaded_before_create() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/products/upload-image"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "url": "https://cdn.test/widget.png" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/products/add"))
        .and(body_partial_json(json!({ "image": "https://cdn.test/widget.png" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = widget_draft();
    draft.select_image(Some(ImageUpload {
        file_name: "widget.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }));

    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    repo.create(&draft).await.unwrap();
}

#[tokio::test]
async fn update_keeps_existing_image_and_sends_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/update"))
        .and(body_partial_json(json!({
            "id": 9, "name": "Hammer", "image": "https://cdn.test/hammer.png"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let current = Product {
        id: 9,
        sku: "SKU-9".into(),
        product_name: "Hammer".into(),
        category: "Tools".into(),
        int_qty: 3,
        cost: Decimal::ONE,
        price: Decimal::TWO,
        image: Some("https://cdn.test/hammer.png".into()),
        max_discount: Decimal::ZERO,
    };
    let draft = <ProductDraft as storefront_admin::services::form::Draft>::from_entity(&current);

    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    repo.update(&current, &draft).await.unwrap();
}

#[tokio::test]
async fn product_delete_sends_the_id_in_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/delete"))
        .and(body_json(json!({ "id": 4 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let target = Product {
        id: 4,
        sku: "SKU-4".into(),
        product_name: "Saw".into(),
        category: "Tools".into(),
        int_qty: 0,
        cost: Decimal::ZERO,
        price: Decimal::ZERO,
        image: None,
        max_discount: Decimal::ZERO,
    };
    let repo = ProductRepository::new(client(&server), ApiEndpoints::default());
    repo.delete(&target).await.unwrap();
}

#[tokio::test]
async fn categories_come_from_the_success_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": 1, "Category": "Tools", "status": 1 },
                { "id": 2, "Category": "Garden", "status": 0 }
            ]
        })))
        .mount(&server)
        .await;

    let repo = CategoryRepository::new(client(&server), ApiEndpoints::default());
    assert_eq!(repo.list_names().await.unwrap(), vec!["Tools", "Garden"]);
}

#[tokio::test]
async fn unsuccessful_category_envelope_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let repo = CategoryRepository::new(client(&server), ApiEndpoints::default());
    assert!(matches!(repo.list().await, Err(AppError::MalformedResponse { .. })));
}

#[tokio::test]
async fn customer_add_form_is_seeded_with_the_next_entry_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/entry-codes/next"))
        .and(body_json(json!({ "codeType": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("CUS-0042")))
        .expect(1)
        .mount(&server)
        .await;

    let repo = CustomerRepository::new(client(&server), ApiEndpoints::default());
    let draft = repo.new_draft().await.unwrap();

    assert_eq!(draft.code, "CUS-0042");
    assert_eq!(draft.country, "Sri Lanka");
}

#[tokio::test]
async fn new_customers_are_created_active() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers/add"))
        .and(body_json(json!({
            "code": "CUS-0042", "name": "Nimal", "email": "", "contact": "",
            "address": "", "city": "Colombo", "country": "Sri Lanka", "status": 1
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let draft = CustomerDraft {
        code: "CUS-0042".into(),
        name: "Nimal".into(),
        city: "Colombo".into(),
        ..CustomerDraft::default()
    };
    let repo = CustomerRepository::new(client(&server), ApiEndpoints::default());
    repo.create(&draft).await.unwrap();
}

#[tokio::test]
async fn customer_delete_posts_the_whole_record() {
    let server = MockServer::start().await;
    let customer = Customer {
        code: "CUS-0007".into(),
        name: "Kamala".into(),
        email: "k@example.com".into(),
        contact: "0771234567".into(),
        address: "12 Lake Rd".into(),
        city: "Kandy".into(),
        country: "Sri Lanka".into(),
        status: 1,
    };
    Mock::given(method("POST"))
        .and(path("/customers/delete"))
        .and(body_partial_json(json!({ "customers": { "code": "CUS-0007", "name": "Kamala" } })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let repo = CustomerRepository::new(client(&server), ApiEndpoints::default());
    repo.delete(&customer).await.unwrap();
}

#[tokio::test]
async fn monthly_dashboard_sums_the_first_block() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sales/monthly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [[
                { "month": "2024-01", "total_net": "1000.00" },
                { "month": "2024-02", "total_net": "250.25" }
            ]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = DashboardService::new(SalesRepository::new(client(&server), ApiEndpoints::default()));
    let dashboard = service.get_sales_dashboard(GroupBy::Monthly).await.unwrap();

    assert_eq!(dashboard.labels, vec![Some("2024-01".to_string()), Some("2024-02".to_string())]);
    assert_eq!(dashboard.total_sales, "1250.25".parse::<Decimal>().unwrap());
    assert_eq!(dashboard.entry_count, 2);
}

#[tokio::test]
async fn invoice_pdf_is_fetched_as_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-pdf"))
        .and(body_json(json!({ "htmlContent": "<p>hi</p>", "invoiceID": "INV1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.4 fake".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = DocumentRepository::new(client(&server), ApiEndpoints::default());
    let pdf = repo.generate_pdf("<p>hi</p>", "INV1").await.unwrap();

    assert!(pdf.starts_with(b"%PDF"));
}
