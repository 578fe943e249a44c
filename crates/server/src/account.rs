//! Account API endpoints: registration and account reads.

use api_types::account::{AccountView, RegisterUser, UserInfo};
use axum::{Extension, Json, extract::State, http::StatusCode};
use engine::accounts;

use crate::{ServerError, password, server::ServerState};

/// Handle requests for creating a new account.
///
/// The only route reachable without credentials.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterUser>,
) -> Result<StatusCode, ServerError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(ServerError::Generic("username must not be empty".to_string()));
    }
    if payload.password.is_empty() {
        return Err(ServerError::Generic("password must not be empty".to_string()));
    }

    let password_hash = password::hash(&payload.password)?;
    state.engine.register(username, &password_hash).await?;

    Ok(StatusCode::CREATED)
}

/// Handle requests for reading the caller's account.
pub async fn get(
    Extension(user): Extension<accounts::Model>,
    State(state): State<ServerState>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.engine.account(&user.username).await?;

    Ok(Json(AccountView {
        username: account.username,
        salary: account.salary,
        business: account.business,
        grant: account.grant,
        other_income: account.other_income,
        total_income: account.total_income,
        loans: account.loans,
        rent: account.rent,
        utilities: account.utilities,
        groceries: account.groceries,
        transportation: account.transportation,
        other_expense: account.other_expense,
        total_expense: account.total_expense,
        balance: account.balance,
        balance_text: account.balance_text,
    }))
}

/// Handle requests for the authenticated caller's identity.
pub async fn user_info(Extension(user): Extension<accounts::Model>) -> Json<UserInfo> {
    Json(UserInfo {
        username: user.username,
    })
}
