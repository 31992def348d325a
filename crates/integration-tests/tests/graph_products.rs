//! Contract tests for product listing and creation.

use catalog_core::{NewProduct, ProductImage};
use catalog_integration_tests::{decode_form_body, graph_client_for};
use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn new_product() -> NewProduct {
    NewProduct {
        name: "Red Mug".to_string(),
        description: "A red mug".to_string(),
        brand: "Acme".to_string(),
        link: "https://shop.example/mug".to_string(),
        price: Decimal::new(1999, 2),
        currency: "USD".to_string(),
        image: ProductImage {
            url: "https://shop.example/mug.jpg".to_string(),
        },
    }
}

#[tokio::test]
async fn test_listing_maps_wire_products_to_domain() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat-1/products"))
        .and(query_param("limit", "100"))
        .and(query_param(
            "fields",
            "id,name,description,brand,url,price,currency,image_url",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{
                "id": "101",
                "name": "Red Mug",
                "description": "A red mug",
                "brand": "Acme",
                "url": "https://shop.example/mug",
                "price": 1999,
                "currency": "USD",
                "image_url": "https://shop.example/mug.jpg"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    let products = graph.products("cat-1", "tok").await.expect("products");

    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.price, Decimal::new(1999, 2));
    assert_eq!(product.link, "https://shop.example/mug");
    assert_eq!(product.image.url, "https://shop.example/mug.jpg");
}

#[tokio::test]
async fn test_creation_posts_cents_and_retailer_id() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cat-1/products_batch"))
        .and(query_param("access_token", "tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"handles": ["h1"]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let graph = graph_client_for(&mock_server);
    graph
        .add_products("cat-1", "tok", &[new_product()])
        .await
        .expect("create");

    let requests = mock_server.received_requests().await.expect("recorded");
    let form = decode_form_body(&requests.first().expect("one request").body);
    let batch: serde_json::Value =
        serde_json::from_str(form.get("requests").expect("requests param")).expect("json");

    let entry = &batch[0];
    assert_eq!(entry["method"], "POST");
    assert!(
        entry["retailer_id"]
            .as_str()
            .expect("retailer id")
            .starts_with("prod_")
    );
    assert_eq!(entry["data"]["price"], 1999);
    assert_eq!(entry["data"]["url"], "https://shop.example/mug");
    assert_eq!(entry["data"]["image_url"], "https://shop.example/mug.jpg");
    assert_eq!(entry["data"]["availability"], "in stock");
}
