mod plan;
mod recipe;

pub use plan::{DayPlan, MealRef, NutrientTotals, SINGLE_DAY_KEY, WeeklyPlan, Weekday};
pub use recipe::{Ingredient, IngredientTotal, RecipeDetail, RecipeId};
