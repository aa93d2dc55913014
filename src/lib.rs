pub mod aggregator;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod prediction;
pub mod profile;
pub mod vocabulary;

pub use aggregator::{MealPlanAggregator, RecipeCache};
pub use client::{RecipeApi, RecipeClient};
pub use error::{PlannerError, Result};
pub use models::{IngredientTotal, MealRef, NutrientTotals, RecipeDetail, WeeklyPlan};
