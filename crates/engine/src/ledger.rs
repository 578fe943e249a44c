//! The ledger calculator: totals, balance and band classification.
//!
//! Everything in this module is a pure function of its inputs. Reading the
//! account, persisting the results and any access control live in the
//! [`Engine`] operations instead.
//!
//! [`Engine`]: crate::Engine

use serde_json::Value;

/// Three-way classification of a balance relative to total income.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Warning,
    Normal,
    Good,
}

impl Band {
    /// The fixed user-facing text stored as `balance_text` on the account.
    pub fn message(self) -> &'static str {
        match self {
            Band::Warning => {
                "Warning: Balance is less than 25% of total income, \
                 please consider reducing unnecessary expenses."
            }
            Band::Good => {
                "Good job! Your balance is more than 50% of your total income. \
                 Your savings are on track."
            }
            Band::Normal => {
                "Your balance is within the normal range [25%-50%]. \
                 You are managing your finances well."
            }
        }
    }
}

/// Result of a balance computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceReport {
    pub balance: f64,
    pub band: Band,
}

/// Coerces a JSON value to an amount, defaulting to 0.
///
/// Accepts numbers and numeric strings. Missing fields, null, non-numeric
/// strings and everything else coerce to 0; the coercion never fails.
/// Non-finite values (NaN, infinities from string input) also coerce to 0.
pub fn amount_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Income line items of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IncomeFields {
    pub salary: f64,
    pub business: f64,
    pub grant: f64,
    pub other_income: f64,
}

impl IncomeFields {
    /// Sum of the four income fields.
    pub fn total(&self) -> f64 {
        self.salary + self.business + self.grant + self.other_income
    }
}

/// Expense line items of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpenseFields {
    pub loans: f64,
    pub rent: f64,
    pub utilities: f64,
    pub groceries: f64,
    pub transportation: f64,
    pub other_expense: f64,
}

impl ExpenseFields {
    /// Sum of the six expense fields.
    pub fn total(&self) -> f64 {
        self.loans + self.rent + self.utilities + self.groceries + self.transportation
            + self.other_expense
    }
}

/// Computes `balance = total_income - total_expense` and classifies it.
///
/// The thresholds are evaluated in this order:
///
/// - `balance < 0.25 * total_income` → [`Band::Warning`]
/// - `balance > 0.5 * total_income` → [`Band::Good`]
/// - otherwise → [`Band::Normal`]
///
/// With `total_income = 0` both thresholds collapse to 0, so a zero balance
/// lands in `Normal` and only a negative balance warns. That boundary is
/// intentional and must not be special-cased.
pub fn compute_balance(total_income: f64, total_expense: f64) -> BalanceReport {
    let balance = total_income - total_expense;

    let band = if balance < 0.25 * total_income {
        Band::Warning
    } else if balance > 0.5 * total_income {
        Band::Good
    } else {
        Band::Normal
    };

    BalanceReport { balance, band }
}
