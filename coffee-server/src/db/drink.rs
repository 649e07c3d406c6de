//! Drink Repository

use shared::models::{Drink, DrinkCreate, Recipe};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

/// Raw table row; `recipe` is JSON text
#[derive(Debug, sqlx::FromRow)]
struct DrinkRow {
    id: i64,
    title: String,
    recipe: String,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = RepoError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        Ok(Drink {
            id: row.id,
            title: row.title,
            recipe: Recipe::from_json(&row.recipe)?,
        })
    }
}

fn validate_title(title: &str) -> RepoResult<()> {
    if title.trim().is_empty() {
        return Err(RepoError::Validation("title must not be blank".to_string()));
    }
    Ok(())
}

/// All drinks ordered by id
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Drink>> {
    let rows = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drink ORDER BY id")
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(Drink::try_from).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Drink>> {
    let row = sqlx::query_as::<_, DrinkRow>("SELECT id, title, recipe FROM drink WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.map(Drink::try_from).transpose()
}

pub async fn create(pool: &SqlitePool, data: DrinkCreate) -> RepoResult<Drink> {
    validate_title(&data.title)?;
    let recipe = data.recipe.to_json()?;
    let row = sqlx::query_as::<_, DrinkRow>(
        "INSERT INTO drink (title, recipe) VALUES (?, ?) RETURNING id, title, recipe",
    )
    .bind(&data.title)
    .bind(&recipe)
    .fetch_one(pool)
    .await?;
    Drink::try_from(row)
}

/// Persist title and recipe of an existing drink
pub async fn update(pool: &SqlitePool, drink: &Drink) -> RepoResult<Drink> {
    validate_title(&drink.title)?;
    let recipe = drink.recipe.to_json()?;
    let rows = sqlx::query("UPDATE drink SET title = ?, recipe = ? WHERE id = ?")
        .bind(&drink.title)
        .bind(&recipe)
        .bind(drink.id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Drink {} not found", drink.id)));
    }

    find_by_id(pool, drink.id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Drink {} not found", drink.id)))
}

/// Hard delete a drink
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM drink WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Drink {id} not found")));
    }
    Ok(())
}
