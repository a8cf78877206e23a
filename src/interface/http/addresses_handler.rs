use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{AddressRequest, AddressResponse, HealthResponse},
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn create_address(
    State(state): State<AppState>,
    Json(request): Json<AddressRequest>,
) -> ApiResult<(StatusCode, Json<AddressResponse>)> {
    request.validate().map_err(ApiProblem::validation)?;

    let created = state
        .address_service
        .create_address(Some(request))
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AddressResponse>> {
    let address_id = parse_id(&id)?;
    let address = state
        .address_service
        .get_address(address_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(address))
}

pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddressRequest>,
) -> ApiResult<Json<AddressResponse>> {
    let address_id = parse_id(&id)?;
    request.validate().map_err(ApiProblem::validation)?;

    let updated = state
        .address_service
        .update_address(address_id, Some(request))
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Json(updated))
}

pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let address_id = parse_id(&id)?;
    state
        .address_service
        .delete_address(Some(address_id))
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_addresses(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<AddressResponse>>> {
    let addresses = state
        .address_service
        .list_addresses()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(addresses))
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        ApiProblem::from_domain(DomainError::invalid_argument("id must be a valid integer"))
    })
}
