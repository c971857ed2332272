use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use chrono::NaiveDate;

use crate::application::{AppError, LedgerService};

use super::dto::{
    AccountDto, BalanceResponse, CreateAccountRequest, CustomerResponse, CustomersResponse,
    HealthResponse, OperationRequest, RenameAccountRequest, StatementDateQuery,
    StatementEntryDto,
};

pub type AppState = Arc<LedgerService>;

/// Resolve the `cpf` request header. A missing or unreadable header is
/// treated the same as an unknown CPF, matching the behavior of the
/// original account-resolution middleware.
fn cpf_header(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("cpf")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or_else(|| AppError::AccountNotFound("(missing cpf header)".to_string()))
}

fn parse_day(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("Invalid date: {input}")))
}

/// POST /account - create an account for a CPF.
pub async fn create_account(
    State(service): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<StatusCode, AppError> {
    let account = service.create_account(&request.cpf, &request.name)?;
    tracing::info!(cpf = %account.cpf, id = %account.id, "account created");
    Ok(StatusCode::CREATED)
}

/// GET /account - fetch the account identified by the `cpf` header.
pub async fn get_account(
    State(service): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CustomerResponse>, AppError> {
    let cpf = cpf_header(&headers)?;
    let account = service.find_account(&cpf)?;
    Ok(Json(CustomerResponse {
        customer: AccountDto::from(&account),
    }))
}

/// PUT /account - rename the account.
pub async fn rename_account(
    State(service): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RenameAccountRequest>,
) -> Result<StatusCode, AppError> {
    let cpf = cpf_header(&headers)?;
    service.rename_account(&cpf, &request.name)?;
    Ok(StatusCode::CREATED)
}

/// DELETE /account - remove the account and its statement.
pub async fn delete_account(
    State(service): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let cpf = cpf_header(&headers)?;
    service.remove_account(&cpf)?;
    tracing::info!(%cpf, "account removed");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /accounts - list every account.
pub async fn list_accounts(State(service): State<AppState>) -> Json<CustomersResponse> {
    let customers = service
        .list_accounts()
        .iter()
        .map(AccountDto::from)
        .collect();
    Json(CustomersResponse { customers })
}

/// GET /statement - the full statement for an account.
pub async fn get_statement(
    State(service): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<StatementEntryDto>>, AppError> {
    let cpf = cpf_header(&headers)?;
    let entries = service.statement(&cpf)?;
    Ok(Json(entries.iter().map(Into::into).collect()))
}

/// GET /statement/date?date=YYYY-MM-DD - statement entries for one day.
pub async fn get_statement_by_date(
    State(service): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<StatementEntryDto>>, AppError> {
    let cpf = cpf_header(&headers)?;
    let day = parse_day(&query.date)?;
    let entries = service.statement_on(&cpf, day)?;
    Ok(Json(entries.iter().map(Into::into).collect()))
}

/// POST /deposit - record a deposit.
pub async fn deposit(
    State(service): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OperationRequest>,
) -> Result<StatusCode, AppError> {
    let cpf = cpf_header(&headers)?;
    let amount_cents = crate::domain::cents_from_amount(request.amount)?;
    let entry = service.deposit(&cpf, &request.description, amount_cents)?;
    tracing::info!(%cpf, kind = %entry.kind, amount_cents = entry.amount_cents, "entry recorded");
    Ok(StatusCode::CREATED)
}

/// POST /withdraw - record a withdrawal, subject to sufficient funds.
pub async fn withdraw(
    State(service): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OperationRequest>,
) -> Result<StatusCode, AppError> {
    let cpf = cpf_header(&headers)?;
    let amount_cents = crate::domain::cents_from_amount(request.amount)?;
    let entry = service.withdraw(&cpf, &request.description, amount_cents)?;
    tracing::info!(%cpf, kind = %entry.kind, amount_cents = entry.amount_cents, "entry recorded");
    Ok(StatusCode::CREATED)
}

/// GET /balance - current balance for an account.
pub async fn get_balance(
    State(service): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<BalanceResponse>, AppError> {
    let cpf = cpf_header(&headers)?;
    let balance = service.balance(&cpf)?;
    Ok(Json(BalanceResponse {
        balance: crate::domain::format_cents(balance),
    }))
}

/// GET /health - liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
