#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use receipt_points::application::engine::ReceiptEngine;
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::build_router;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Router {
    let engine = ReceiptEngine::new(Box::new(InMemoryReceiptStore::new()));
    build_router(Arc::new(engine))
}

pub fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

pub fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

/// Produces `count` well-formed receipts from a fixed seed.
pub fn generate_receipts(count: usize, seed: u64) -> Vec<Value> {
    const RETAILERS: [&str; 4] = ["Target", "Walgreens", "M&M Corner Market", "Trader Joe's"];
    const DESCRIPTIONS: [&str; 5] = [
        "Gatorade",
        "Dasani",
        "Pepsi - 12-oz",
        "Emils Cheese Pizza",
        "  Tea  ",
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let items: Vec<Value> = (0..rng.gen_range(0..6))
                .map(|_| {
                    json!({
                        "shortDescription": DESCRIPTIONS[rng.gen_range(0..DESCRIPTIONS.len())],
                        "price": format!("{}.{:02}", rng.gen_range(0..50), rng.gen_range(0..100)),
                    })
                })
                .collect();
            let (month, day) = (rng.gen_range(1..=12), rng.gen_range(1..=28));
            json!({
                "retailer": RETAILERS[rng.gen_range(0..RETAILERS.len())],
                "purchaseDate": format!("2022-{month:02}-{day:02}"),
                "purchaseTime": format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
                "total": format!("{}.{:02}", rng.gen_range(0..200), rng.gen_range(0..4) * 25),
                "items": items,
            })
        })
        .collect()
}

pub fn post_receipt(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get_points(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/receipts/{id}/points"))
        .body(Body::empty())
        .unwrap()
}

/// Sends one request through the router and decodes the JSON reply.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn upload(app: &Router, receipt: &Value) -> u64 {
    let (status, body) = send(app, post_receipt(receipt.to_string())).await;
    assert_eq!(status, StatusCode::CREATED, "upload failed: {body}");
    body["id"].as_u64().unwrap()
}
