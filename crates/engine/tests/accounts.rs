use sea_orm::{Database, DatabaseConnection};

use engine::{Band, Engine, EngineError, ExpenseFields, IncomeFields};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn engine_with_user(username: &str) -> (Engine, DatabaseConnection) {
    let (engine, db) = engine_with_db().await;
    engine.register(username, "not-a-real-hash").await.unwrap();
    (engine, db)
}

#[tokio::test]
async fn register_creates_zeroed_account() {
    let (engine, _db) = engine_with_user("alice").await;

    let account = engine.account("alice").await.unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.salary, 0.0);
    assert_eq!(account.total_income, 0.0);
    assert_eq!(account.total_expense, 0.0);
    assert_eq!(account.balance, 0.0);
    assert_eq!(account.balance_text, "");
}

#[tokio::test]
async fn register_duplicate_username_fails() {
    let (engine, _db) = engine_with_user("alice").await;

    let err = engine.register("alice", "other-hash").await.unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("alice".to_string()));
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.account("ghost").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("ghost".to_string()));
}

#[tokio::test]
async fn update_income_stores_fields_and_total() {
    let (engine, _db) = engine_with_user("alice").await;

    let total = engine
        .update_income(
            "alice",
            IncomeFields {
                salary: 1200.0,
                business: 300.0,
                grant: 50.0,
                other_income: 25.5,
            },
        )
        .await
        .unwrap();
    assert_eq!(total, 1575.5);

    let account = engine.account("alice").await.unwrap();
    assert_eq!(account.salary, 1200.0);
    assert_eq!(account.business, 300.0);
    assert_eq!(account.grant, 50.0);
    assert_eq!(account.other_income, 25.5);
    assert_eq!(account.total_income, 1575.5);
}

#[tokio::test]
async fn update_expense_stores_fields_and_total() {
    let (engine, _db) = engine_with_user("alice").await;

    let total = engine
        .update_expense(
            "alice",
            ExpenseFields {
                loans: 100.0,
                rent: 450.0,
                utilities: 80.0,
                groceries: 120.0,
                transportation: 50.0,
                other_expense: 10.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(total, 810.0);

    let account = engine.account("alice").await.unwrap();
    assert_eq!(account.rent, 450.0);
    assert_eq!(account.total_expense, 810.0);
}

#[tokio::test]
async fn update_income_for_unknown_user_fails() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .update_income("ghost", IncomeFields::default())
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("ghost".to_string()));
}

#[tokio::test]
async fn compute_balance_persists_balance_and_text() {
    let (engine, _db) = engine_with_user("alice").await;

    engine
        .update_income(
            "alice",
            IncomeFields {
                salary: 1000.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    engine
        .update_expense(
            "alice",
            ExpenseFields {
                rent: 400.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let report = engine.compute_balance("alice").await.unwrap();
    assert_eq!(report.balance, 600.0);
    assert_eq!(report.band, Band::Good);

    let account = engine.account("alice").await.unwrap();
    assert_eq!(account.balance, 600.0);
    assert_eq!(account.balance_text, Band::Good.message());
}

#[tokio::test]
async fn compute_balance_warns_below_quarter_income() {
    let (engine, _db) = engine_with_user("alice").await;

    engine
        .update_income(
            "alice",
            IncomeFields {
                salary: 1000.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    engine
        .update_expense(
            "alice",
            ExpenseFields {
                rent: 800.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let report = engine.compute_balance("alice").await.unwrap();
    assert_eq!(report.balance, 200.0);
    assert_eq!(report.band, Band::Warning);
}

#[tokio::test]
async fn fresh_account_balance_is_normal() {
    // Zero income, zero expense: balance 0 is not below the (zero) warning
    // threshold, so the account sits in the normal band.
    let (engine, _db) = engine_with_user("alice").await;

    let report = engine.compute_balance("alice").await.unwrap();
    assert_eq!(report.balance, 0.0);
    assert_eq!(report.band, Band::Normal);
}

#[tokio::test]
async fn balance_is_stale_until_recomputed() {
    let (engine, _db) = engine_with_user("alice").await;

    engine
        .update_income(
            "alice",
            IncomeFields {
                salary: 1000.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    engine.compute_balance("alice").await.unwrap();

    // A later income update must not recompute the stored balance.
    engine
        .update_income(
            "alice",
            IncomeFields {
                salary: 2000.0,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let account = engine.account("alice").await.unwrap();
    assert_eq!(account.total_income, 2000.0);
    assert_eq!(account.balance, 1000.0);

    let report = engine.compute_balance("alice").await.unwrap();
    assert_eq!(report.balance, 2000.0);
}
