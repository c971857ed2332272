use axum::Router;
use axum::routing::{get, post};

use super::handlers::{
    AppState, create_account, delete_account, deposit, get_account, get_balance, get_statement,
    get_statement_by_date, health_check, list_accounts, rename_account, withdraw,
};

/// Build the API router.
///
/// All account-scoped routes resolve the target account from the `cpf`
/// request header; only `POST /account` carries the CPF in its body.
pub fn create_router(service: AppState) -> Router {
    Router::new()
        .route(
            "/account",
            post(create_account)
                .get(get_account)
                .put(rename_account)
                .delete(delete_account),
        )
        .route("/accounts", get(list_accounts))
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .route("/balance", get(get_balance))
        .route("/health", get(health_check))
        .with_state(service)
}
