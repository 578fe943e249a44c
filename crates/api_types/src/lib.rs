use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Three-way classification of a balance relative to total income.
///
/// The server returns the band together with its fixed user-facing text in
/// [`ledger::BalanceResponse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Warning,
    Normal,
    Good,
}

pub mod account {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RegisterUser {
        pub username: String,
        pub password: String,
    }

    /// The authenticated caller's identity.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserInfo {
        pub username: String,
    }

    /// Full account view: stored line items plus the derived fields.
    ///
    /// `balance` and `balance_text` reflect the last explicit balance
    /// computation, not necessarily the latest income/expense update.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub username: String,
        pub salary: f64,
        pub business: f64,
        pub grant: f64,
        pub other_income: f64,
        pub total_income: f64,
        pub loans: f64,
        pub rent: f64,
        pub utilities: f64,
        pub groceries: f64,
        pub transportation: f64,
        pub other_expense: f64,
        pub total_expense: f64,
        pub balance: f64,
        pub balance_text: String,
    }
}

pub mod ledger {
    use super::*;

    /// Income line items. Values may be JSON numbers, numeric strings, or
    /// anything else; the server coerces non-numeric and missing values to 0.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct IncomeUpdate {
        pub salary: Option<Value>,
        pub business: Option<Value>,
        pub grant: Option<Value>,
        pub other_income: Option<Value>,
    }

    /// Expense line items, with the same coercion rules as [`IncomeUpdate`].
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub loans: Option<Value>,
        pub rent: Option<Value>,
        pub utilities: Option<Value>,
        pub groceries: Option<Value>,
        pub transportation: Option<Value>,
        pub other_expense: Option<Value>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeSaved {
        pub total_income: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseSaved {
        pub total_expense: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceResponse {
        pub balance: f64,
        pub band: Band,
        pub balance_text: String,
    }
}
