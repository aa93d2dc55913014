mod cache;
mod meal_plan;

pub use cache::RecipeCache;
pub use meal_plan::{MealPlanAggregator, merge_totals};
