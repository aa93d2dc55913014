use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{PlannerError, Result};

/// Meal planner: weekly meal plans, shopping lists and weight projections.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Recipe API key.
    #[arg(long, env = "SPOONACULAR_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Recipe API base URL.
    #[arg(long, env = "SPOONACULAR_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Path to a `name;id` ingredient vocabulary file used to match exclusions.
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a plan and print meals, nutrients and the shopping list.
    Plan {
        /// Plan a single day instead of a week.
        #[arg(long)]
        day: bool,
    },

    /// Show one recipe's details.
    Recipe {
        /// Recipe id.
        id: u64,

        /// Ask for nutrition data.
        #[arg(long)]
        nutrition: bool,

        /// Ask for wine pairing.
        #[arg(long)]
        wine_pairing: bool,

        /// Ask for taste data.
        #[arg(long)]
        taste: bool,
    },

    /// Generate a plan and project body weight over the week.
    Predict {
        /// URL of the JSON regression model artifact.
        #[arg(long, env = "MEAL_PLANNER_MODEL_URL")]
        model_url: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { day: false }
    }
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API settings from flags and environment.
    pub fn api_config(&self) -> Result<ApiConfig> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            PlannerError::InvalidInput(
                "No API key; pass --api-key or set SPOONACULAR_KEY".to_string(),
            )
        })?;
        ApiConfig::new(key, &self.base_url, self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipe_command() {
        let cli = Cli::try_parse_from([
            "meal_planner",
            "--api-key",
            "abc",
            "--base-url",
            "http://localhost:9000",
            "recipe",
            "42",
            "--nutrition",
        ])
        .unwrap();

        let config = cli.api_config().unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert!(matches!(
            cli.command,
            Some(Command::Recipe { id: 42, nutrition: true, wine_pairing: false, taste: false })
        ));
    }

    #[test]
    fn test_command_defaults_to_plan() {
        let cli = Cli::try_parse_from(["meal_planner", "--api-key", "abc"]).unwrap();
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Plan { day: false }
        ));
    }

    #[test]
    fn test_parse_day_plan() {
        let cli =
            Cli::try_parse_from(["meal_planner", "--api-key", "abc", "plan", "--day"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Plan { day: true })));
    }

    #[test]
    fn test_predict_keeps_timeout() {
        let cli = Cli::try_parse_from([
            "meal_planner",
            "--timeout-secs",
            "5",
            "predict",
            "--model-url",
            "http://localhost/model.json",
        ])
        .unwrap();

        let timeout = cli.timeout();
        let Some(Command::Predict { model_url }) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(model_url, "http://localhost/model.json");
        assert_eq!(timeout, Duration::from_secs(5));
    }
}
