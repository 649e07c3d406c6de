//! Drink Model
//!
//! A drink is a title plus an ordered recipe of ingredients. Two views exist:
//! [`Drink::short`] for the public menu (ingredient names hidden) and
//! [`Drink::long`] for staff.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::AppError;
use crate::util::is_truthy;

/// One recipe entry; keys other than these three are rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

/// Public projection of an ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Ordered list of ingredients, stored as JSON text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(pub Vec<Ingredient>);

impl Recipe {
    /// Parse a submitted recipe. A single ingredient object is accepted and
    /// normalized into a one-element recipe.
    pub fn from_value(value: &Value) -> Result<Self, PayloadError> {
        let entries = match value {
            Value::Array(items) => items
                .iter()
                .map(Self::ingredient)
                .collect::<Result<Vec<_>, _>>()?,
            Value::Object(_) => vec![Self::ingredient(value)?],
            _ => {
                return Err(PayloadError::InvalidField {
                    field: "recipe",
                    reason: "expected an ingredient object or a list of them".to_string(),
                });
            }
        };
        Ok(Self(entries))
    }

    fn ingredient(value: &Value) -> Result<Ingredient, PayloadError> {
        Ingredient::deserialize(value).map_err(|e| PayloadError::InvalidField {
            field: "recipe",
            reason: e.to_string(),
        })
    }

    /// Parse the persisted JSON text form
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize to the persisted JSON text form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Drink entity (serializes as the long view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

/// Public view of a drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDrink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

impl Drink {
    /// Public view: ingredient names are hidden
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .ingredients()
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }

    /// Staff view: full recipe
    pub fn long(&self) -> Drink {
        self.clone()
    }

    /// Apply a partial update; absent fields keep their current value
    pub fn apply(&mut self, update: DrinkUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(recipe) = update.recipe {
            self.recipe = recipe;
        }
    }
}

/// Create drink payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkCreate {
    pub title: String,
    pub recipe: Recipe,
}

impl DrinkCreate {
    /// Build from a request body object with `title` and `recipe`
    pub fn from_body(body: &Value) -> Result<Self, PayloadError> {
        let object = body.as_object().ok_or(PayloadError::NotAnObject)?;

        let title = match object.get("title") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::String(_)) => {
                return Err(PayloadError::InvalidField {
                    field: "title",
                    reason: "must not be blank".to_string(),
                });
            }
            Some(_) => {
                return Err(PayloadError::InvalidField {
                    field: "title",
                    reason: "must be a string".to_string(),
                });
            }
            None => return Err(PayloadError::MissingField("title")),
        };

        let recipe = object
            .get("recipe")
            .filter(|v| !v.is_null())
            .ok_or(PayloadError::MissingField("recipe"))
            .and_then(Recipe::from_value)?;

        Ok(Self { title, recipe })
    }
}

/// Update drink payload
///
/// A field is `Some` only when the submitted value was truthy; falsy values
/// (`""`, `null`, `[]`, ...) leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkUpdate {
    pub title: Option<String>,
    pub recipe: Option<Recipe>,
}

impl DrinkUpdate {
    pub fn from_body(body: &Value) -> Result<Self, PayloadError> {
        let object = body.as_object().ok_or(PayloadError::NotAnObject)?;

        let title = match object.get("title").filter(|v| is_truthy(v)) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(PayloadError::InvalidField {
                    field: "title",
                    reason: "must be a string".to_string(),
                });
            }
            None => None,
        };

        let recipe = object
            .get("recipe")
            .filter(|v| is_truthy(v))
            .map(Recipe::from_value)
            .transpose()?;

        Ok(Self { title, recipe })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}

/// Why a submitted drink payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        tracing::debug!(error = %err, "Rejected drink payload");
        AppError::unprocessable()
    }
}
