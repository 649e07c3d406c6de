//! Data models shared between the server and API clients

pub mod drink;

pub use drink::{
    Drink, DrinkCreate, DrinkUpdate, Ingredient, PayloadError, Recipe, ShortDrink,
    ShortIngredient,
};
