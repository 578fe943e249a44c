//! Accounts table.
//!
//! One row per user, keyed by username. Besides the credentials it stores
//! the raw income/expense line items and the derived fields (`total_income`,
//! `total_expense`, `balance`, `balance_text`). The derived fields are only
//! written by the engine operations, never by clients directly.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    /// Argon2 PHC-format hash, never the clear-text password.
    pub password: String,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
