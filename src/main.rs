use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use meal_planner_rs::aggregator::MealPlanAggregator;
use meal_planner_rs::cli::{Cli, Command};
use meal_planner_rs::client::{DetailOptions, PlanRequest, RecipeApi, RecipeClient, Timeframe};
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::interface::{
    collect_profile, display_day, display_profile, display_projection, display_recipe,
    display_shopping_list, display_week_nutrients, prompt_yes_no,
};
use meal_planner_rs::prediction::{build_features, load_model, project_weights};
use meal_planner_rs::profile::UserProfile;
use meal_planner_rs::vocabulary::IngredientVocabulary;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MEAL_PLANNER_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let timeout = cli.timeout();
    let client = RecipeClient::new(cli.api_config()?)?;

    let vocabulary = match &cli.vocabulary {
        Some(path) => {
            let vocab = IngredientVocabulary::load(path)?;
            info!("Loaded {} vocabulary ingredients from {}", vocab.len(), path.display());
            Some(vocab)
        }
        None => None,
    };

    match cli.command.unwrap_or_default() {
        Command::Plan { day } => {
            let timeframe = if day { Timeframe::Day } else { Timeframe::Week };
            cmd_plan(&client, vocabulary.as_ref(), timeframe)
        }
        Command::Recipe {
            id,
            nutrition,
            wine_pairing,
            taste,
        } => cmd_recipe(
            &client,
            id,
            DetailOptions {
                include_nutrition: nutrition,
                add_wine_pairing: wine_pairing,
                add_taste_data: taste,
            },
        ),
        Command::Predict { model_url } => {
            cmd_predict(&client, vocabulary.as_ref(), &model_url, timeout)
        }
    }
}

/// Collect a profile and request a plan for it.
fn generate_for_profile(
    client: &RecipeClient,
    vocabulary: Option<&IngredientVocabulary>,
    timeframe: Timeframe,
) -> Result<(UserProfile, MealPlanAggregator)> {
    let profile = collect_profile(vocabulary)?;
    display_profile(&profile);

    let request = PlanRequest {
        target_calories: profile.target_calories(),
        diet: profile.diet,
        exclude: profile.exclude.clone(),
        timeframe,
    };

    let aggregator = MealPlanAggregator::generate(client, &request)?;

    let plan = aggregator.plan();
    if timeframe == Timeframe::Week && !plan.is_complete() {
        println!("Note: the plan only covers {} of 7 days.", plan.len());
    }

    Ok((profile, aggregator))
}

/// Print every day, the plan totals and optionally the shopping lists.
fn print_plan(client: &RecipeClient, aggregator: &mut MealPlanAggregator) -> Result<()> {
    let days: Vec<String> = aggregator.days().map(str::to_string).collect();

    for day in &days {
        display_day(day, aggregator.meals_for_day(day)?, &aggregator.nutrients_for_day(day)?);
    }
    display_week_nutrients(days.len(), &aggregator.nutrients_for_week());

    if days.len() > 1 && prompt_yes_no("Show daily shopping lists?", false)? {
        for day in &days {
            let rows = aggregator.ingredients_for_day(day, client)?;
            display_shopping_list(day, &rows);
        }
    }

    if prompt_yes_no("Show the shopping list?", true)? {
        let rows = aggregator.ingredients_for_week(client);
        display_shopping_list("Shopping list", &rows);
    }

    debug!("Recipe details fetched: {}", aggregator.cached_recipes());
    Ok(())
}

fn cmd_plan(
    client: &RecipeClient,
    vocabulary: Option<&IngredientVocabulary>,
    timeframe: Timeframe,
) -> Result<()> {
    let (_, mut aggregator) = generate_for_profile(client, vocabulary, timeframe)?;
    print_plan(client, &mut aggregator)
}

fn cmd_recipe(client: &RecipeClient, id: u64, options: DetailOptions) -> Result<()> {
    let detail = client
        .recipe_detail(id, &options)
        .ok_or(PlannerError::RecipeUnavailable(id))?;

    display_recipe(&detail);
    Ok(())
}

fn cmd_predict(
    client: &RecipeClient,
    vocabulary: Option<&IngredientVocabulary>,
    model_url: &str,
    timeout: Duration,
) -> Result<()> {
    let (profile, mut aggregator) = generate_for_profile(client, vocabulary, Timeframe::Week)?;

    print_plan(client, &mut aggregator)?;

    let model = load_model(model_url, timeout)?;
    let features = build_features(aggregator.plan(), &profile.activity_days);
    let projection = project_weights(&model, &features, profile.weight_kg);
    display_projection(&projection);

    Ok(())
}
