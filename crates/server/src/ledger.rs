//! Ledger API endpoints: income/expense updates and balance computation.

use api_types::ledger::{
    BalanceResponse, ExpenseSaved, ExpenseUpdate, IncomeSaved, IncomeUpdate,
};
use axum::{Extension, Json, extract::State};
use engine::{ExpenseFields, IncomeFields, accounts, amount_or_zero};

use crate::{ServerError, server::ServerState};

fn map_band(band: engine::Band) -> api_types::Band {
    match band {
        engine::Band::Warning => api_types::Band::Warning,
        engine::Band::Normal => api_types::Band::Normal,
        engine::Band::Good => api_types::Band::Good,
    }
}

/// Handle requests for storing income line items.
///
/// Payload values go through [`amount_or_zero`]: numbers and numeric strings
/// are taken as-is, everything else counts as 0.
pub async fn income_update(
    Extension(user): Extension<accounts::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<IncomeUpdate>,
) -> Result<Json<IncomeSaved>, ServerError> {
    let fields = IncomeFields {
        salary: amount_or_zero(payload.salary.as_ref()),
        business: amount_or_zero(payload.business.as_ref()),
        grant: amount_or_zero(payload.grant.as_ref()),
        other_income: amount_or_zero(payload.other_income.as_ref()),
    };

    let total_income = state.engine.update_income(&user.username, fields).await?;

    Ok(Json(IncomeSaved { total_income }))
}

/// Handle requests for storing expense line items.
pub async fn expense_update(
    Extension(user): Extension<accounts::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<Json<ExpenseSaved>, ServerError> {
    let fields = ExpenseFields {
        loans: amount_or_zero(payload.loans.as_ref()),
        rent: amount_or_zero(payload.rent.as_ref()),
        utilities: amount_or_zero(payload.utilities.as_ref()),
        groceries: amount_or_zero(payload.groceries.as_ref()),
        transportation: amount_or_zero(payload.transportation.as_ref()),
        other_expense: amount_or_zero(payload.other_expense.as_ref()),
    };

    let total_expense = state.engine.update_expense(&user.username, fields).await?;

    Ok(Json(ExpenseSaved { total_expense }))
}

/// Handle requests for recomputing the caller's balance.
///
/// Persists the balance and its band text, then returns them.
pub async fn balance_compute(
    Extension(user): Extension<accounts::Model>,
    State(state): State<ServerState>,
) -> Result<Json<BalanceResponse>, ServerError> {
    let report = state.engine.compute_balance(&user.username).await?;

    Ok(Json(BalanceResponse {
        balance: report.balance,
        band: map_band(report.band),
        balance_text: report.band.message().to_string(),
    }))
}
