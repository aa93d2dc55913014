use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Day not present in meal plan: {0}")]
    MissingDay(String),

    #[error("Unsupported diet: {0}")]
    InvalidDiet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Prediction model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Failed to generate a meal plan. Check your API key and connection and try again.")]
    PlanUnavailable,

    #[error("Could not fetch recipe {0}")]
    RecipeUnavailable(u64),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
