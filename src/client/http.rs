use std::time::Instant;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::client::Diet;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{DayPlan, RecipeDetail, RecipeId, WeeklyPlan};

const GENERATE_PATH: &str = "mealplanner/generate";

/// Span of a generated plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timeframe {
    Day,
    #[default]
    Week,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Day => "day",
            Timeframe::Week => "week",
        }
    }
}

/// Constraints for plan generation.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Daily calorie target; zero is treated as unset.
    pub target_calories: Option<u32>,

    pub diet: Option<Diet>,

    /// Ingredients or intolerances to leave out.
    pub exclude: Vec<String>,

    pub timeframe: Timeframe,
}

impl PlanRequest {
    /// Build a request from raw user input; an unsupported diet becomes no filter.
    pub fn from_input(target_calories: Option<u32>, diet: &str, exclude: Vec<String>) -> Self {
        Self {
            target_calories,
            diet: Diet::parse_lenient(diet),
            exclude,
            timeframe: Timeframe::Week,
        }
    }
}

/// Optional extras for a recipe-detail lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOptions {
    pub include_nutrition: bool,
    pub add_wine_pairing: bool,
    pub add_taste_data: bool,
}

/// Query parameters for plan generation. Unset values are omitted, never sent empty.
pub fn plan_query(request: &PlanRequest, api_key: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("apiKey", api_key.to_string()),
        ("timeframe", request.timeframe.as_str().to_string()),
    ];

    if let Some(calories) = request.target_calories.filter(|c| *c > 0) {
        query.push(("targetCalories", calories.to_string()));
    }

    if let Some(diet) = request.diet {
        query.push(("diet", diet.as_str().to_string()));
    }

    let exclude: Vec<&str> = request
        .exclude
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect();
    if !exclude.is_empty() {
        query.push(("exclude", exclude.join(",")));
    }

    query
}

/// Query parameters for a recipe-detail lookup.
pub fn detail_query(options: &DetailOptions, api_key: &str) -> Vec<(&'static str, String)> {
    vec![
        ("apiKey", api_key.to_string()),
        ("includeNutrition", options.include_nutrition.to_string()),
        ("addWinePairing", options.add_wine_pairing.to_string()),
        ("addTasteData", options.add_taste_data.to_string()),
    ]
}

/// Operations the aggregator and CLI need from the recipe provider.
///
/// Implementations report any transport failure as `None`; callers never see
/// a transport error.
pub trait RecipeApi {
    /// A `day` request yields a one-day plan keyed by [`SINGLE_DAY_KEY`].
    ///
    /// [`SINGLE_DAY_KEY`]: crate::models::SINGLE_DAY_KEY
    fn generate_plan(&self, request: &PlanRequest) -> Option<WeeklyPlan>;

    fn recipe_detail(&self, id: RecipeId, options: &DetailOptions) -> Option<RecipeDetail>;
}

/// Blocking HTTP client for the recipe API.
///
/// One request per call; no retries and no caching.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    config: ApiConfig,
    http: Client,
}

impl RecipeClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `path` and decode the JSON body. Non-2xx statuses are errors.
    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.config.endpoint(path);
        let resp = self.http.get(&url).query(query).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    /// `get_json` with failures logged and absorbed.
    fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Option<T> {
        let start = Instant::now();
        debug!("Requesting {}", path);

        match self.get_json(path, query) {
            Ok(body) => {
                info!(
                    "Recipe API request completed - path={}, duration={:.2}s",
                    path,
                    start.elapsed().as_secs_f32()
                );
                Some(body)
            }
            Err(e) => {
                warn!("Recipe API request failed - path={}, error={}", path, e);
                None
            }
        }
    }
}

impl RecipeApi for RecipeClient {
    fn generate_plan(&self, request: &PlanRequest) -> Option<WeeklyPlan> {
        let query = plan_query(request, &self.config.api_key);

        match request.timeframe {
            Timeframe::Week => self.fetch(GENERATE_PATH, &query),
            // The day timeframe answers with a bare day object.
            Timeframe::Day => self
                .fetch::<DayPlan>(GENERATE_PATH, &query)
                .map(WeeklyPlan::single_day),
        }
    }

    fn recipe_detail(&self, id: RecipeId, options: &DetailOptions) -> Option<RecipeDetail> {
        let path = format!("recipes/{}/information", id);
        let query = detail_query(options, &self.config.api_key);
        self.fetch(&path, &query)
    }
}
