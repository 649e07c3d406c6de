//! Drink API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::{Drink, DrinkCreate, DrinkUpdate, ShortDrink};
use shared::response::{DeleteResponse, DrinksResponse};

use crate::api::extract::JsonBody;
use crate::auth::Claims;
use crate::db::drink;
use crate::state::AppState;

/// Path ids that are not integers name no drink
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::not_found())
}

async fn find_or_404(state: &AppState, id: i64) -> AppResult<Drink> {
    drink::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(AppError::not_found)
}

/// GET /drinks - public menu, short view
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DrinksResponse<ShortDrink>>> {
    let drinks = drink::find_all(&state.pool).await?;
    Ok(Json(DrinksResponse::new(
        drinks.iter().map(Drink::short).collect(),
    )))
}

/// GET /drinks-detail - full recipes
pub async fn list_detail(State(state): State<AppState>) -> AppResult<Json<DrinksResponse<Drink>>> {
    let drinks = drink::find_all(&state.pool).await?;
    Ok(Json(DrinksResponse::new(drinks)))
}

/// POST /drinks - create a drink
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<DrinksResponse<Drink>>> {
    let body = match body {
        None | Some(Value::Null) => return Err(AppError::bad_request()),
        Some(Value::Object(ref map)) if map.is_empty() => return Err(AppError::bad_request()),
        Some(body) => body,
    };

    let payload = DrinkCreate::from_body(&body)?;
    let created = drink::create(&state.pool, payload).await?;

    tracing::info!(
        id = created.id,
        title = %created.title,
        subject = claims.sub.as_deref().unwrap_or("-"),
        "Drink created"
    );
    Ok(Json(DrinksResponse::single(created.long())))
}

/// PATCH /drinks/{id} - replace title and/or recipe
///
/// Falsy values keep what is stored.
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<DrinksResponse<Drink>>> {
    let id = parse_id(&id)?;
    let mut existing = find_or_404(&state, id).await?;

    let body = body.ok_or_else(AppError::unprocessable)?;
    let changes = DrinkUpdate::from_body(&body)?;
    if changes.is_empty() {
        return Ok(Json(DrinksResponse::single(existing.long())));
    }

    existing.apply(changes);
    let updated = drink::update(&state.pool, &existing).await?;

    tracing::info!(
        id = updated.id,
        subject = claims.sub.as_deref().unwrap_or("-"),
        "Drink updated"
    );
    Ok(Json(DrinksResponse::single(updated.long())))
}

/// DELETE /drinks/{id} - hard delete
pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    find_or_404(&state, id).await?;
    drink::delete(&state.pool, id).await?;

    tracing::info!(
        id,
        subject = claims.sub.as_deref().unwrap_or("-"),
        "Drink deleted"
    );
    Ok(Json(DeleteResponse::new(id)))
}
