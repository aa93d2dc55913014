mod diet;
mod http;

pub use diet::Diet;
pub use http::{
    DetailOptions, PlanRequest, RecipeApi, RecipeClient, Timeframe, detail_query, plan_query,
};
