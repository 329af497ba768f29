use axum::{Json, extract::State, http::StatusCode};

use crate::{
    application::dto::{PurchaseResponse, RecordPurchaseRequest},
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn record_purchase(
    State(state): State<AppState>,
    Json(request): Json<RecordPurchaseRequest>,
) -> ApiResult<(StatusCode, Json<PurchaseResponse>)> {
    let created = state
        .purchase_service
        .record_purchase(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_purchases(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PurchaseResponse>>> {
    let purchases = state
        .purchase_service
        .list_purchases()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(purchases))
}
