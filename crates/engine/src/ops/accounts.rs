//! Account operations: registration, reads and ledger updates.
//!
//! Every write runs inside a DB transaction. The arithmetic itself lives in
//! [`crate::ledger`]; these operations only move values between the store
//! and the calculator.

use sea_orm::{ActiveValue, ConnectionTrait, TransactionTrait, prelude::*};

use crate::{
    EngineError, ResultEngine, accounts,
    ledger::{self, BalanceReport, ExpenseFields, IncomeFields},
};

use super::{Engine, with_tx};

async fn require_account<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> ResultEngine<accounts::Model> {
    accounts::Entity::find_by_id(username)
        .one(db)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(username.to_string()))
}

impl Engine {
    /// Creates a fresh account with all ledger fields at 0.
    ///
    /// `password_hash` must already be hashed by the caller; the engine
    /// never sees clear-text credentials.
    pub async fn register(&self, username: &str, password_hash: &str) -> ResultEngine<()> {
        with_tx!(self, |tx| {
            if accounts::Entity::find_by_id(username)
                .one(&tx)
                .await?
                .is_some()
            {
                return Err(EngineError::ExistingKey(username.to_string()));
            }

            let account = accounts::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(password_hash.to_string()),
                salary: ActiveValue::Set(0.0),
                business: ActiveValue::Set(0.0),
                grant: ActiveValue::Set(0.0),
                other_income: ActiveValue::Set(0.0),
                total_income: ActiveValue::Set(0.0),
                loans: ActiveValue::Set(0.0),
                rent: ActiveValue::Set(0.0),
                utilities: ActiveValue::Set(0.0),
                groceries: ActiveValue::Set(0.0),
                transportation: ActiveValue::Set(0.0),
                other_expense: ActiveValue::Set(0.0),
                total_expense: ActiveValue::Set(0.0),
                balance: ActiveValue::Set(0.0),
                balance_text: ActiveValue::Set(String::new()),
            };
            account.insert(&tx).await?;

            Ok(())
        })
    }

    /// Reads one account by username.
    pub async fn account(&self, username: &str) -> ResultEngine<accounts::Model> {
        require_account(&self.database, username).await
    }

    /// Stores the income line items and their total; returns the new total.
    ///
    /// Does not touch `balance`/`balance_text`: those stay as written by the
    /// last explicit [`Engine::compute_balance`] call.
    pub async fn update_income(
        &self,
        username: &str,
        fields: IncomeFields,
    ) -> ResultEngine<f64> {
        let total_income = fields.total();
        with_tx!(self, |tx| {
            let account = require_account(&tx, username).await?;
            let mut account: accounts::ActiveModel = account.into();
            account.salary = ActiveValue::Set(fields.salary);
            account.business = ActiveValue::Set(fields.business);
            account.grant = ActiveValue::Set(fields.grant);
            account.other_income = ActiveValue::Set(fields.other_income);
            account.total_income = ActiveValue::Set(total_income);
            account.update(&tx).await?;

            Ok(total_income)
        })
    }

    /// Stores the expense line items and their total; returns the new total.
    pub async fn update_expense(
        &self,
        username: &str,
        fields: ExpenseFields,
    ) -> ResultEngine<f64> {
        let total_expense = fields.total();
        with_tx!(self, |tx| {
            let account = require_account(&tx, username).await?;
            let mut account: accounts::ActiveModel = account.into();
            account.loans = ActiveValue::Set(fields.loans);
            account.rent = ActiveValue::Set(fields.rent);
            account.utilities = ActiveValue::Set(fields.utilities);
            account.groceries = ActiveValue::Set(fields.groceries);
            account.transportation = ActiveValue::Set(fields.transportation);
            account.other_expense = ActiveValue::Set(fields.other_expense);
            account.total_expense = ActiveValue::Set(total_expense);
            account.update(&tx).await?;

            Ok(total_expense)
        })
    }

    /// Recomputes the balance from the stored totals and persists the result
    /// together with its band text.
    pub async fn compute_balance(&self, username: &str) -> ResultEngine<BalanceReport> {
        with_tx!(self, |tx| {
            let account = require_account(&tx, username).await?;
            let report = ledger::compute_balance(account.total_income, account.total_expense);

            let mut account: accounts::ActiveModel = account.into();
            account.balance = ActiveValue::Set(report.balance);
            account.balance_text = ActiveValue::Set(report.band.message().to_string());
            account.update(&tx).await?;

            Ok(report)
        })
    }
}
