//! Account handlers
//!
//! CRUD endpoints for ledger accounts.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::domain::entities::{
    AccountId, AccountResponse, CreateAccountRequest, UpdateAccountRequest,
};
use crate::domain::ports::AccountRepository;
use crate::error::AppError;
use crate::handlers::response::WebResponse;
use crate::AppState;

fn parse_id(raw: &str) -> Result<AccountId, AppError> {
    raw.trim()
        .parse::<i64>()
        .map(AccountId)
        .map_err(|_| AppError::MalformedInput(raw.to_string()))
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// POST /accounts
pub async fn create_account<AR: AccountRepository>(
    State(state): State<AppState<AR>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<WebResponse<AccountResponse>>, AppError> {
    let request = decode(payload)?;
    let account = state.account_service.create(request).await?;

    Ok(Json(WebResponse::ok(account)))
}

/// PUT /accounts/:id
///
/// The id in the path wins over any id in the body.
pub async fn update_account<AR: AccountRepository>(
    State(state): State<AppState<AR>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<WebResponse<AccountResponse>>, AppError> {
    let id = parse_id(&raw_id)?;
    let mut request = decode(payload)?;
    request.id = id;

    let account = state.account_service.update(request).await?;

    Ok(Json(WebResponse::ok(account)))
}

/// DELETE /accounts/:id
pub async fn delete_account<AR: AccountRepository>(
    State(state): State<AppState<AR>>,
    Path(raw_id): Path<String>,
) -> Result<Json<WebResponse<()>>, AppError> {
    let id = parse_id(&raw_id)?;
    state.account_service.delete(id).await?;

    Ok(Json(WebResponse::ok_message(format!(
        "Account with ID: {} deleted successfully.",
        id
    ))))
}

/// GET /accounts/:id
pub async fn get_account<AR: AccountRepository>(
    State(state): State<AppState<AR>>,
    Path(raw_id): Path<String>,
) -> Result<Json<WebResponse<AccountResponse>>, AppError> {
    let id = parse_id(&raw_id)?;
    let account = state.account_service.find_by_id(id).await?;

    Ok(Json(WebResponse::ok(account)))
}

/// GET /accounts
pub async fn list_accounts<AR: AccountRepository>(
    State(state): State<AppState<AR>>,
) -> Result<Json<WebResponse<Vec<AccountResponse>>>, AppError> {
    let accounts = state.account_service.find_all().await?;
    Ok(Json(WebResponse::ok(accounts)))
}
