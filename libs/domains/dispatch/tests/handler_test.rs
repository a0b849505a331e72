//! Handler tests for the Dispatch domain
//!
//! Drive the courier and task routers against the in-memory repositories,
//! including rule rejections and the resulting store state.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_dispatch::*;
use domain_regions::{CreateRegion, InMemoryRegionRepository, RegionRepository};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

struct TestApp {
    router: Router,
    regions: InMemoryRegionRepository,
}

impl TestApp {
    fn new() -> Self {
        let regions = InMemoryRegionRepository::new();
        let dispatch = InMemoryDispatchRepository::new(regions.clone());

        let router = Router::new()
            .nest(
                "/couriers",
                handlers::couriers::router(CourierService::new(dispatch.clone())),
            )
            .nest("/tasks", handlers::tasks::router(TaskService::new(dispatch)));

        Self { router, regions }
    }

    async fn region(&self, name: &str) -> i32 {
        self.regions
            .create(CreateRegion {
                name: name.to_string(),
            })
            .await
            .unwrap()
            .id
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn courier(&self, region_id: i32, max_cells: i32) -> i64 {
        let (status, body) = self
            .send(
                "POST",
                "/couriers",
                Some(json!({
                    "full_name": "Ivan Sidorov",
                    "region_id": region_id,
                    "max_cells": max_cells
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    async fn create_task(&self, courier_id: i64, region_id: i32, cells: i32) -> (StatusCode, Value) {
        self.send(
            "POST",
            "/tasks",
            Some(json!({
                "description": "Box of books",
                "cells": cells,
                "region_id": region_id,
                "address": "3 Library Lane",
                "courier_id": courier_id
            })),
        )
        .await
    }

    async fn task_count(&self) -> usize {
        let (_, body) = self.send("GET", "/tasks", None).await;
        body.as_array().unwrap().len()
    }
}

#[tokio::test]
async fn test_capacity_boundary() {
    let app = TestApp::new();
    let region = app.region("North").await;
    let courier = app.courier(region, 10).await;

    let (status, _) = app.create_task(courier, region, 6).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.create_task(courier, region, 5).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "RULE_VIOLATION");
    assert_eq!(body["details"]["kind"], "capacity_exceeded");
    assert_eq!(body["details"]["required"], 11);
    assert_eq!(body["details"]["max_cells"], 10);

    let (status, _) = app.create_task(courier, region, 4).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.task_count().await, 2);
}

#[tokio::test]
async fn test_region_mismatch_rejected() {
    let app = TestApp::new();
    let north = app.region("North").await;
    let south = app.region("South").await;
    let courier = app.courier(north, 100).await;

    let (status, body) = app.create_task(courier, south, 1).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "region_mismatch");
    assert_eq!(app.task_count().await, 0);
}

#[tokio::test]
async fn test_create_task_unknown_courier_returns_404() {
    let app = TestApp::new();
    let region = app.region("North").await;

    let (status, body) = app.create_task(42, region, 1).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_task_missing_field_returns_400() {
    let app = TestApp::new();

    let (status, _) = app
        .send("POST", "/tasks", Some(json!({ "description": "No cells" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_courier_unknown_region_returns_404() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            "POST",
            "/couriers",
            Some(json!({ "full_name": "Lost", "region_id": 9, "max_cells": 3 })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_courier_missing_field_returns_400() {
    let app = TestApp::new();
    let region = app.region("North").await;

    let (status, _) = app
        .send(
            "POST",
            "/couriers",
            Some(json!({ "full_name": "No Capacity", "region_id": region })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, couriers) = app.send("GET", "/couriers", None).await;
    assert!(couriers.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_courier_zero_capacity_returns_400() {
    let app = TestApp::new();
    let region = app.region("North").await;

    let (status, body) = app
        .send(
            "POST",
            "/couriers",
            Some(json!({ "full_name": "Tiny", "region_id": region, "max_cells": 0 })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_couriers_embeds_tasks() {
    let app = TestApp::new();
    let region = app.region("Central").await;
    let courier = app.courier(region, 10).await;
    app.create_task(courier, region, 3).await;
    app.create_task(courier, region, 2).await;

    let (status, body) = app.send("GET", "/couriers", None).await;

    assert_eq!(status, StatusCode::OK);
    let couriers: Vec<CourierWithTasks> = serde_json::from_value(body).unwrap();
    assert_eq!(couriers.len(), 1);
    assert_eq!(couriers[0].region_name.as_deref(), Some("Central"));
    assert_eq!(couriers[0].used_cells, 5);
    assert_eq!(couriers[0].tasks.len(), 2);
}

#[tokio::test]
async fn test_transfer_task() {
    let app = TestApp::new();
    let region = app.region("North").await;
    let from = app.courier(region, 10).await;
    let to = app.courier(region, 10).await;
    let (_, task) = app.create_task(from, region, 4).await;
    let uri = format!("/tasks/{}", task["id"]);

    let (status, body) = app
        .send("PATCH", &uri, Some(json!({ "courier_id": to })))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courier_id"], to);

    let (_, fetched) = app.send("GET", &uri, None).await;
    assert_eq!(fetched["courier_id"], to);
}

#[tokio::test]
async fn test_transfer_across_regions_rejected() {
    let app = TestApp::new();
    let north = app.region("North").await;
    let south = app.region("South").await;
    let from = app.courier(north, 10).await;
    let to = app.courier(south, 1000).await;
    let (_, task) = app.create_task(from, north, 1).await;
    let uri = format!("/tasks/{}", task["id"]);

    let (status, body) = app
        .send("PATCH", &uri, Some(json!({ "courier_id": to })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["kind"], "region_mismatch");

    let (_, fetched) = app.send("GET", &uri, None).await;
    assert_eq!(fetched["courier_id"], from);
}

#[tokio::test]
async fn test_transfer_missing_body_returns_400() {
    let app = TestApp::new();
    let region = app.region("North").await;
    let courier = app.courier(region, 10).await;
    let (_, task) = app.create_task(courier, region, 1).await;

    let (status, _) = app
        .send("PATCH", &format!("/tasks/{}", task["id"]), Some(json!({})))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transfer_unknown_task_returns_404() {
    let app = TestApp::new();

    let (status, _) = app
        .send("PATCH", "/tasks/77", Some(json!({ "courier_id": 1 })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let app = TestApp::new();
    let region = app.region("North").await;
    let courier = app.courier(region, 10).await;
    let (_, task) = app.create_task(courier, region, 1).await;
    let uri = format!("/tasks/{}", task["id"]);

    let (status, _) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.task_count().await, 0);
}

#[tokio::test]
async fn test_stale_delete_does_not_hit_newer_task() {
    let app = TestApp::new();
    let region = app.region("North").await;
    let courier = app.courier(region, 10).await;
    let (_, first) = app.create_task(courier, region, 1).await;
    let stale_uri = format!("/tasks/{}", first["id"]);

    let (status, _) = app.send("DELETE", &stale_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, second) = app.create_task(courier, region, 1).await;
    assert_ne!(second["id"], first["id"]);

    let (status, _) = app.send("DELETE", &stale_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.task_count().await, 1);
}

#[tokio::test]
async fn test_invalid_task_id_returns_400() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/tasks/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}
