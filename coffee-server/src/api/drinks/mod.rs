//! Drink API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use crate::auth::require_permission;
use crate::state::AppState;

pub fn router(state: &AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/drinks", get(handler::list));

    let detail_routes = Router::new()
        .route("/drinks-detail", get(handler::list_detail))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission(GET_DRINKS_DETAIL),
        ));

    let create_routes = Router::new()
        .route("/drinks", post(handler::create))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission(POST_DRINKS),
        ));

    let update_routes = Router::new()
        .route("/drinks/{id}", patch(handler::update))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission(PATCH_DRINKS),
        ));

    let delete_routes = Router::new()
        .route("/drinks/{id}", axum::routing::delete(handler::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_permission(DELETE_DRINKS),
        ));

    public_routes
        .merge(detail_routes)
        .merge(create_routes)
        .merge(update_routes)
        .merge(delete_routes)
}
