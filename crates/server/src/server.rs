use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sea_orm::{DatabaseConnection, EntityTrait};

use std::sync::Arc;

use crate::{account, ledger, password};
use engine::{Engine, accounts};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
}

/// Resolves the caller from HTTP Basic credentials.
///
/// The matching account model is inserted as a request extension for the
/// handlers. Every failure collapses to 401 without detail.
async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let account = accounts::Entity::find_by_id(auth_header.username())
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let Some(account) = account else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    if !password::verify(auth_header.password(), &account.password) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    request.extensions_mut().insert(account);
    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/account", get(account::get))
        .route("/user", get(account::user_info))
        .route("/income", post(ledger::income_update))
        .route("/expense", post(ledger::expense_update))
        .route("/balance", post(ledger::balance_compute))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .route("/register", post(account::register))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        db,
    };

    axum::serve(listener, router(state)).await
}
