// REST API with Axum
//
// /accounts/...   account lookups and money movement (errors → 400)
// /customers/...  customer CRUD and account ownership (unknown customer → 404)

pub mod accounts;
pub mod customers;
pub mod error;

pub use error::ApiError;

use crate::bank::Bank;
use crate::config::Config;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::Router;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Shared application state
///
/// Mutating handlers hold the write lock for the whole request, so
/// concurrent operations on one account are applied one after another.
#[derive(Clone)]
pub struct AppState {
    bank: Arc<RwLock<Bank>>,
}

impl AppState {
    pub fn new(bank: Bank) -> Self {
        AppState {
            bank: Arc::new(RwLock::new(bank)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Bank>, ApiError> {
        self.bank.read().map_err(|_| {
            error!("bank state lock poisoned");
            ApiError::internal("Bank state unavailable")
        })
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Bank>, ApiError> {
        self.bank.write().map_err(|_| {
            error!("bank state lock poisoned");
            ApiError::internal("Bank state unavailable")
        })
    }
}

/// All routes, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(accounts::routes())
        .merge(customers::routes())
        .with_state(state)
}

/// Routes plus request tracing and CORS for the configured frontend origin
pub fn app(state: AppState, config: &Config) -> Result<Router, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(&config.cors_origin)?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}
