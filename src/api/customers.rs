// Customer endpoints - unknown customer → 404, everything else invalid → 400
//
// Reads reconcile account lists first, so they take the write lock.

use super::{ApiError, AppState};
use crate::bank::Bank;
use crate::entities::{Currency, Customer, CustomerId, CustomerPatch};
use crate::views::CustomerView;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, error, info};

/// POST /customers body
#[derive(Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// POST /customers/:id/accounts body
#[derive(Debug, Deserialize)]
pub struct NewAccount {
    pub currency: Currency,
    #[serde(default)]
    pub balance: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/:id", get(get_customer).delete(delete_customer))
        .route("/customers/id/:id", put(update_customer))
        .route("/customers/:id/accounts", post(create_account))
        .route("/customers/:id/accounts/:number", delete(delete_account))
}

fn existing_customer(bank: &Bank, id: CustomerId) -> Result<Customer, ApiError> {
    bank.get_customer(id).map_err(|_| {
        error!(customer_id = id, "customer not found");
        ApiError::customer_not_found(id)
    })
}

fn view_of(bank: &Bank, id: CustomerId) -> Result<Json<CustomerView>, ApiError> {
    let customer = existing_customer(bank, id)?;
    Ok(Json(CustomerView::render(&customer, bank)))
}

/// GET /customers
async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerView>>, ApiError> {
    let mut bank = state.write()?;
    bank.assign_accounts_to_customers();
    Ok(Json(CustomerView::render_all(&bank)))
}

/// GET /customers/:id
async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerView>, ApiError> {
    let mut bank = state.write()?;
    bank.assign_accounts_to_customers();
    view_of(&bank, id)
}

/// POST /customers
async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<Json<CustomerView>, ApiError> {
    let Json(body) = payload?;
    let mut bank = state.write()?;
    let saved = bank.save_customer(Customer::new(body.name, body.email, body.age))?;
    info!(%saved, "customer created");
    Ok(Json(CustomerView::render(&saved, &bank)))
}

/// PUT /customers/id/:id - body: any subset of name, email, age
async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    payload: Result<Json<CustomerPatch>, JsonRejection>,
) -> Result<Json<CustomerView>, ApiError> {
    let Json(patch) = payload?;
    let mut bank = state.write()?;
    let mut customer = existing_customer(&bank, id)?;
    if patch.is_empty() {
        debug!(customer_id = id, "empty update, nothing to merge");
        return Ok(Json(CustomerView::render(&customer, &bank)));
    }
    patch.apply(&mut customer);

    let updated = bank
        .update_customer(&customer)
        .map_err(|_| ApiError::customer_not_found(id))?;
    info!(customer_id = id, "customer updated");
    Ok(Json(CustomerView::render(&updated, &bank)))
}

/// DELETE /customers/:id
async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode, ApiError> {
    let mut bank = state.write()?;
    match bank.delete_customer(id) {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) | Err(_) => {
            error!(customer_id = id, "customer not found for deletion");
            Err(ApiError::customer_not_found(id))
        }
    }
}

/// POST /customers/:id/accounts - body: {currency, balance?}
async fn create_account(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> Result<Json<CustomerView>, ApiError> {
    let Json(body) = payload?;
    let mut bank = state.write()?;
    existing_customer(&bank, id)?;

    bank.create_account(id, body.currency, body.balance)?;
    view_of(&bank, id)
}

/// DELETE /customers/:id/accounts/:number
async fn delete_account(
    State(state): State<AppState>,
    Path((id, number)): Path<(CustomerId, String)>,
) -> Result<&'static str, ApiError> {
    let mut bank = state.write()?;
    let customer = existing_customer(&bank, id)?;

    if !customer.owns(&number) {
        return Err(ApiError::bad_request(format!(
            "Account with number {} not found",
            number
        )));
    }

    bank.delete_account(id, &number)?;
    Ok("Account successfully deleted")
}
