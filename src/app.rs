use axum::{
    Router,
    http::{HeaderName, Method},
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        products_handler::{
            create_product, get_product, healthcheck, list_products, total_costs,
        },
        purchases_handler::{list_purchases, record_purchase},
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route(
            "/api/v1/products",
            get(list_products).post(create_product),
        )
        .route("/api/v1/products/total-costs", get(total_costs))
        .route("/api/v1/products/{id}", get(get_product))
        .route(
            "/api/v1/purchases",
            get(list_purchases).post(record_purchase),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS]),
        )
        .with_state(state)
}
