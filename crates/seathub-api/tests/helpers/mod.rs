//! Shared test helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use seathub_api::{AppState, build_app};
use seathub_core::config::{AppConfig, DatabaseBackend};
use seathub_core::error::AppError;
use seathub_core::result::AppResult;
use seathub_database::ledger::{MemorySeatLedger, SeatClaim, SeatLedger};
use seathub_database::repositories::{registration, waitlist};
use seathub_entity::registration::{NewSignup, Registration};
use seathub_entity::waitlist::WaitlistEntry;

/// Response captured from a test request.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application over a given ledger.
pub struct TestApp {
    pub router: Router,
    pub ledger: Arc<dyn SeatLedger>,
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = DatabaseBackend::Memory;
    config.server.static_dir = None;
    config
}

impl TestApp {
    /// App over an empty in-memory ledger.
    pub fn new() -> Self {
        Self::with_ledger(Arc::new(MemorySeatLedger::new()))
    }

    /// App over an in-memory ledger already holding `count` registrations.
    pub async fn with_registrations(count: usize) -> Self {
        Self::with_ledger(Arc::new(seeded_ledger(count).await))
    }

    /// App over an arbitrary ledger.
    pub fn with_ledger(ledger: Arc<dyn SeatLedger>) -> Self {
        let state = AppState::new(test_config(), Arc::clone(&ledger));
        Self {
            router: build_app(state),
            ledger,
        }
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.send(request).await
    }

    /// Send a raw request.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        TestResponse { status, body }
    }

    pub async fn register(&self, name: &str, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/register",
            Some(serde_json::json!({ "name": name, "email": email })),
        )
        .await
    }
}

/// In-memory ledger already holding `count` registrations.
pub async fn seeded_ledger(count: usize) -> MemorySeatLedger {
    let ledger = MemorySeatLedger::new();
    for n in 0..count {
        let signup = NewSignup::new(format!("Seeded {n}"), format!("seeded{n}@example.com"))
            .expect("valid signup");
        ledger.claim_seat(signup, u32::MAX).await.expect("seed");
    }
    ledger
}

/// Ledger whose every storage call fails.
#[derive(Debug)]
pub struct BrokenLedger;

#[async_trait]
impl SeatLedger for BrokenLedger {
    async fn registered_count(&self) -> AppResult<u64> {
        Err(AppError::database("Database error"))
    }

    async fn claim_seat(&self, _signup: NewSignup, _total_seats: u32) -> AppResult<SeatClaim> {
        Err(AppError::database(registration::INSERT_FAILED))
    }

    async fn list_registrations(&self) -> AppResult<Vec<Registration>> {
        Err(AppError::database("Database error"))
    }

    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::database("Database error"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::database("Health check failed"))
    }
}

/// In-memory ledger whose waitlist insert fails once seats run out.
#[derive(Debug, Default)]
pub struct WaitlistDownLedger {
    inner: MemorySeatLedger,
}

impl WaitlistDownLedger {
    pub fn new(inner: MemorySeatLedger) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SeatLedger for WaitlistDownLedger {
    async fn registered_count(&self) -> AppResult<u64> {
        self.inner.registered_count().await
    }

    async fn claim_seat(&self, signup: NewSignup, total_seats: u32) -> AppResult<SeatClaim> {
        if self.inner.registered_count().await? >= u64::from(total_seats) {
            return Err(AppError::database(waitlist::INSERT_FAILED));
        }
        self.inner.claim_seat(signup, total_seats).await
    }

    async fn list_registrations(&self) -> AppResult<Vec<Registration>> {
        self.inner.list_registrations().await
    }

    async fn list_waitlist(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.inner.list_waitlist().await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
