use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{
        CreateProductRequest, HealthResponse, ProductResponse, TotalCostsResponse,
    },
    domain::errors::DomainError,
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let created = state
        .product_service
        .create_product(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    let product_id = parse_id(&id)?;
    let product = state
        .product_service
        .get_product(product_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state
        .product_service
        .list_products()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(products))
}

/// The one route with no failure path: the service degrades to an empty
/// report instead of returning a problem.
pub async fn total_costs(State(state): State<AppState>) -> Json<TotalCostsResponse> {
    Json(state.product_service.total_costs().await)
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        ApiProblem::from_domain(DomainError::validation("id must be an integer"))
    })
}
