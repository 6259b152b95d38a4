// Account endpoints - every failure is a 400 with a plain-text reason

use super::{ApiError, AppState};
use crate::error::BankError;
use crate::views::AccountView;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{error, warn};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts/:number", get(get_account))
        .route("/accounts/deposit/:number", put(deposit))
        .route("/accounts/withdrawal/:number", put(withdraw))
        .route("/accounts/transfer/:from/:to", put(transfer))
}

/// GET /accounts
async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<AccountView>>, ApiError> {
    let bank = state.read()?;
    Ok(Json(AccountView::render_all(&bank)))
}

/// GET /accounts/:number
async fn get_account(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<AccountView>, ApiError> {
    let bank = state.read()?;
    let account = bank.find_account_by_number(&number).map_err(|e| {
        warn!(number = %number, "account not found");
        ApiError::from(e)
    })?;
    Ok(Json(AccountView::render(&account, &bank)))
}

/// PUT /accounts/deposit/:number - body: amount
async fn deposit(
    State(state): State<AppState>,
    Path(number): Path<String>,
    payload: Result<Json<f64>, JsonRejection>,
) -> Result<Json<AccountView>, ApiError> {
    let Json(amount) = payload?;
    let mut bank = state.write()?;
    match bank.deposit(&number, amount) {
        Ok(account) => Ok(Json(AccountView::render(&account, &bank))),
        Err(e @ BankError::NotFound { .. }) => {
            error!(number = %number, "deposit to unknown account");
            Err(e.into())
        }
        Err(BankError::InvalidArgument(reason)) => {
            error!(number = %number, amount, %reason, "deposit rejected");
            Err(ApiError::bad_request("Amount for deposit must be greater than 0"))
        }
    }
}

/// PUT /accounts/withdrawal/:number - body: amount
async fn withdraw(
    State(state): State<AppState>,
    Path(number): Path<String>,
    payload: Result<Json<f64>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(amount) = payload?;
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ApiError::bad_request(
            "Amount for withdrawal must be greater than 0",
        ));
    }

    let mut bank = state.write()?;
    match bank.withdraw(&number, amount) {
        Ok(true) => Ok("Withdrawal successful"),
        Ok(false) => Err(ApiError::bad_request("Insufficient balance")),
        Err(e) => {
            error!(number = %number, error = %e, "error withdrawing amount");
            Err(e.into())
        }
    }
}

/// PUT /accounts/transfer/:from/:to - body: amount
async fn transfer(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
    payload: Result<Json<f64>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(amount) = payload?;
    let mut bank = state.write()?;
    bank.transfer(&from, &to, amount).map_err(|e| {
        error!(from = %from, to = %to, error = %e, "error transferring amount");
        ApiError::from(e)
    })?;
    Ok("Transfer successful")
}
