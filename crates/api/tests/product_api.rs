//! HTTP-level integration tests for the product endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over the in-memory product store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, create_product, delete, fresh_app, get, post_json,
    put_json,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_location_and_empty_body() {
    let (_store, app) = fresh_app();
    let response = post_json(
        app,
        "/Produits",
        json!({"nom": "Laptop", "prix": 1000, "prixAchat": 700}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/Produits/1");
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn created_location_resolves_to_the_product() {
    let (store, _) = fresh_app();
    let id = create_product(&store, json!({"nom": "Laptop", "prix": 1000, "prixAchat": 700})).await;

    let response = get(build_test_app(store), &format!("/Produits/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["nom"], "Laptop");
    assert_eq!(json["prix"], 1000);
    assert_eq!(json["prixAchat"], 700);
}

#[tokio::test]
async fn create_with_zero_price_returns_400_free_product() {
    let (store, app) = fresh_app();
    let response = post_json(app, "/Produits", json!({"nom": "Gift", "prix": 0})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FREE_PRODUCT");
    assert_eq!(json["error"], "Sale price must be strictly greater than 0");

    // Nothing was stored.
    let list = body_json(get(build_test_app(store), "/Produits").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_negative_price_returns_400_validation_error() {
    let (_store, app) = fresh_app();
    let response = post_json(app, "/Produits", json!({"nom": "Debt", "prix": -10})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let (store, _) = fresh_app();
    let id = create_product(&store, json!({"id": 77, "nom": "Mug", "prix": 8})).await;
    assert_eq!(id, 1);
}

#[tokio::test]
async fn create_accepts_english_field_names() {
    let (store, _) = fresh_app();
    let id = create_product(
        &store,
        json!({"name": "Laptop", "price": 1000, "purchasePrice": 700}),
    )
    .await;

    let json = body_json(get(build_test_app(store), &format!("/Produits/{id}")).await).await;
    assert_eq!(json["nom"], "Laptop");
    assert_eq!(json["prixAchat"], 700);
}

#[tokio::test]
async fn create_without_price_is_rejected_as_free_product() {
    let (store, app) = fresh_app();
    let response = post_json(app, "/Produits", json!({"nom": "No price"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FREE_PRODUCT");

    let list = body_json(get(build_test_app(store), "/Produits").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let (_store, app) = fresh_app();
    let response = post_json(app, "/Produits", json!({"prix": 10})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_nonexistent_product_returns_404() {
    let (_store, app) = fresh_app();
    let response = get(app, "/Produits/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 999999 not found");
}

#[tokio::test]
async fn get_with_non_numeric_id_returns_400() {
    let (_store, app) = fresh_app();
    let response = get(app, "/Produits/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_never_includes_purchase_price() {
    let (store, _) = fresh_app();
    create_product(&store, json!({"nom": "Laptop", "prix": 1000, "prixAchat": 700})).await;
    create_product(&store, json!({"nom": "Mouse", "prix": 20})).await;

    let response = get(build_test_app(store), "/Produits").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    for item in arr {
        assert!(item.get("prixAchat").is_none(), "leaked purchase price: {item}");
        assert!(item["id"].is_number());
        assert!(item["nom"].is_string());
        assert!(item["prix"].is_number());
    }
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_overwrites_existing_product() {
    let (store, _) = fresh_app();
    let id = create_product(&store, json!({"nom": "Old", "prix": 10, "prixAchat": 5})).await;

    let response = put_json(
        build_test_app(Arc::clone(&store)),
        "/Produits",
        json!({"id": id, "nom": "New", "prix": 25, "prixAchat": 10}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(store), &format!("/Produits/{id}")).await).await;
    assert_eq!(json["nom"], "New");
    assert_eq!(json["prix"], 25);
    assert_eq!(json["prixAchat"], 10);
}

#[tokio::test]
async fn put_without_id_inserts_new_product() {
    let (store, app) = fresh_app();
    let response = put_json(app, "/Produits", json!({"nom": "Fresh", "prix": 3})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get(build_test_app(store), "/Produits").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["nom"], "Fresh");
}

#[tokio::test]
async fn delete_removes_product() {
    let (store, _) = fresh_app();
    let id = create_product(&store, json!({"nom": "Gone", "prix": 10})).await;

    let response = delete(build_test_app(Arc::clone(&store)), &format!("/Produits/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    let response = get(build_test_app(store), &format!("/Produits/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_unknown_id_is_silent() {
    let (_store, app) = fresh_app();
    let response = delete(app, "/Produits/4242").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn margin_report_is_price_minus_purchase_price() {
    let (store, _) = fresh_app();
    create_product(&store, json!({"nom": "Laptop", "prix": 1000, "prixAchat": 700})).await;
    create_product(&store, json!({"nom": "Loss leader", "prix": 50, "prixAchat": 80})).await;
    create_product(&store, json!({"nom": "No cost", "prix": 15})).await;

    let response = get(build_test_app(store), "/AdminProduits").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"Product{id=1, nom='Laptop', prix=1000}": 300},
            {"Product{id=2, nom='Loss leader', prix=50}": -30},
            {"Product{id=3, nom='No cost', prix=15}": 15},
        ])
    );
}

#[tokio::test]
async fn alphabetical_listing_is_sorted_by_name() {
    let (store, _) = fresh_app();
    for (name, price) in [("Table de Ping Pong", 750), ("Aspirateur Robot", 500), ("Ordinateur portable", 350)] {
        create_product(&store, json!({"nom": name, "prix": price})).await;
    }

    let response = get(build_test_app(store), "/ProduitsAlpha").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nom"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Aspirateur Robot", "Ordinateur portable", "Table de Ping Pong"]
    );
}

#[tokio::test]
async fn expensive_query_ignores_path_value() {
    let (store, _) = fresh_app();
    for (name, price) in [("Cheap", 100), ("Borderline", 400), ("Pricey", 401), ("Luxury", 900)] {
        create_product(&store, json!({"nom": name, "prix": price})).await;
    }

    for prix in ["0", "1000"] {
        let response = get(build_test_app(Arc::clone(&store)), &format!("/test/produits/{prix}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let names: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["nom"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Pricey", "Luxury"]);
    }
}
