use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState) -> Router {
    let employee_routes = Router::new()
        .route(
            "/employees",
            post(handlers::employees::create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(handlers::employees::get_employee_handler)
                .put(handlers::employees::update_employee_handler)
                .delete(handlers::employees::delete_employee_handler),
        )
        .route_layer(from_fn(middleware::require_role_header));

    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(employee_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
