pub use error::EngineError;
pub use ledger::{
    BalanceReport, Band, ExpenseFields, IncomeFields, amount_or_zero, compute_balance,
};
pub use ops::{Engine, EngineBuilder};

pub mod accounts;
mod error;
pub mod ledger;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;
