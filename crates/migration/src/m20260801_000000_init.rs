//! Initial schema migration.
//!
//! Creates the single `users` table: credentials, income/expense line items
//! and the derived balance fields, all numeric columns defaulting to 0.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Users {
    Table,
    Username,
    Password,
    Salary,
    Business,
    Grant,
    OtherIncome,
    TotalIncome,
    Loans,
    Rent,
    Utilities,
    Groceries,
    Transportation,
    OtherExpense,
    TotalExpense,
    Balance,
    BalanceText,
}

fn amount(column: Users) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    def.double().not_null().default(0.0);
    def
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(amount(Users::Salary))
                    .col(amount(Users::Business))
                    .col(amount(Users::Grant))
                    .col(amount(Users::OtherIncome))
                    .col(amount(Users::TotalIncome))
                    .col(amount(Users::Loans))
                    .col(amount(Users::Rent))
                    .col(amount(Users::Utilities))
                    .col(amount(Users::Groceries))
                    .col(amount(Users::Transportation))
                    .col(amount(Users::OtherExpense))
                    .col(amount(Users::TotalExpense))
                    .col(amount(Users::Balance))
                    .col(
                        ColumnDef::new(Users::BalanceText)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}
