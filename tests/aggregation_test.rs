use std::cell::RefCell;
use std::collections::HashMap;

use meal_planner_rs::aggregator::{MealPlanAggregator, merge_totals};
use meal_planner_rs::client::{DetailOptions, PlanRequest, RecipeApi};
use meal_planner_rs::error::PlannerError;
use meal_planner_rs::models::{
    Ingredient, IngredientTotal, NutrientTotals, RecipeDetail, RecipeId, WeeklyPlan,
};

/// Stub API that serves canned details and counts lookups per id.
struct CountingApi {
    recipes: HashMap<RecipeId, RecipeDetail>,
    calls: RefCell<HashMap<RecipeId, usize>>,
}

impl CountingApi {
    fn new() -> Self {
        Self {
            recipes: HashMap::new(),
            calls: RefCell::new(HashMap::new()),
        }
    }

    fn with_recipe(mut self, id: RecipeId, ingredients: Vec<Ingredient>) -> Self {
        self.recipes.insert(
            id,
            RecipeDetail {
                id,
                title: format!("Recipe {}", id),
                image: Some(format!("https://img.example/{}.jpg", id)),
                extended_ingredients: ingredients,
                ..Default::default()
            },
        );
        self
    }

    fn calls_for(&self, id: RecipeId) -> usize {
        self.calls.borrow().get(&id).copied().unwrap_or(0)
    }

    fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl RecipeApi for CountingApi {
    fn generate_plan(&self, _request: &PlanRequest) -> Option<WeeklyPlan> {
        None
    }

    fn recipe_detail(&self, id: RecipeId, _options: &DetailOptions) -> Option<RecipeDetail> {
        *self.calls.borrow_mut().entry(id).or_insert(0) += 1;
        self.recipes.get(&id).cloned()
    }
}

fn no_unit(name: &str, amount: f64) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        unit: None,
        amount,
    }
}

fn two_day_plan() -> WeeklyPlan {
    serde_json::from_str(
        r#"{"week": {
            "mon": {"meals": [{"id": 1, "title": "A"}], "nutrients": {"calories": 500, "protein": 10, "fat": 5, "carbohydrates": 50}},
            "tue": {"meals": [{"id": 2, "title": "B"}], "nutrients": {"calories": 600, "protein": 20, "fat": 10, "carbohydrates": 60}}
        }}"#,
    )
    .unwrap()
}

fn two_day_api() -> CountingApi {
    CountingApi::new()
        .with_recipe(1, vec![Ingredient::new("egg", "", 2.0)])
        .with_recipe(
            2,
            vec![Ingredient::new("egg", "", 1.0), Ingredient::new("milk", "cup", 1.0)],
        )
}

fn full_week_plan() -> WeeklyPlan {
    serde_json::from_str(
        r#"{"week": {
            "mon": {"meals": [{"id": 10, "title": "Oats"}, {"id": 11, "title": "Stew"}], "nutrients": {"calories": 1900, "protein": 80, "fat": 60, "carbohydrates": 210}},
            "tue": {"meals": [{"id": 11, "title": "Stew"}, {"id": 12, "title": "Salad"}], "nutrients": {"calories": 1750, "protein": 75, "fat": 55, "carbohydrates": 190}},
            "wed": {"meals": [{"id": 13, "title": "Curry"}], "nutrients": {"calories": 2100, "protein": 90, "fat": 70, "carbohydrates": 230}},
            "thu": {"meals": [{"id": 10, "title": "Oats"}, {"id": 99, "title": "Broken"}], "nutrients": {"calories": 1800, "protein": 70, "fat": 50, "carbohydrates": 200}},
            "fri": {"meals": [], "nutrients": {"calories": 0, "protein": 0, "fat": 0, "carbohydrates": 0}},
            "sat": {"meals": [{"id": 12, "title": "Salad"}, {"id": 13, "title": "Curry"}], "nutrients": {"calories": 2000, "protein": 85, "fat": 65, "carbohydrates": 220}},
            "sun": {"meals": [{"id": 11, "title": "Stew"}], "nutrients": {"calories": 1600, "protein": 60, "fat": 45, "carbohydrates": 180}}
        }}"#,
    )
    .unwrap()
}

fn full_week_api() -> CountingApi {
    CountingApi::new()
        .with_recipe(
            10,
            vec![Ingredient::new("oats", "g", 80.0), Ingredient::new("milk", "ml", 200.0)],
        )
        .with_recipe(
            11,
            vec![
                Ingredient::new("beef", "g", 300.0),
                Ingredient::new("carrot", "", 2.0),
                Ingredient::new("flour", "tbsp", 1.5),
            ],
        )
        .with_recipe(
            12,
            vec![no_unit("tomato", 3.0), Ingredient::new("olive oil", "tbsp", 2.0)],
        )
        .with_recipe(
            13,
            vec![
                Ingredient::new("rice", "cup", 1.0),
                Ingredient::new("milk", "cup", 0.5),
                Ingredient::new("flour", "g", 30.0),
            ],
        )
}

fn find<'a>(rows: &'a [IngredientTotal], name: &str, unit: &str) -> Option<&'a IngredientTotal> {
    rows.iter().find(|r| r.name == name && r.unit == unit)
}

#[test]
fn test_end_to_end_two_day_plan() {
    let api = two_day_api();
    let mut agg = MealPlanAggregator::new(two_day_plan());

    assert_eq!(
        agg.nutrients_for_week(),
        NutrientTotals::new(1100.0, 30.0, 15.0, 110.0)
    );

    let week = agg.ingredients_for_week(&api);
    assert_eq!(week.len(), 2);
    assert_eq!(find(&week, "egg", "").unwrap().amount, 3.0);
    assert_eq!(find(&week, "milk", "cup").unwrap().amount, 1.0);
}

#[test]
fn test_week_nutrients_equal_sum_of_days() {
    let agg = MealPlanAggregator::new(full_week_plan());

    let summed: NutrientTotals = agg
        .days()
        .map(|d| agg.nutrients_for_day(d).unwrap())
        .sum();

    assert_eq!(agg.nutrients_for_week(), summed);
    assert_eq!(agg.nutrients_for_week().calories, 11150.0);
}

#[test]
fn test_partial_week_nutrients_degrade_gracefully() {
    let agg = MealPlanAggregator::new(two_day_plan());

    assert!(!agg.plan().is_complete());
    assert!(matches!(agg.nutrients_for_day("wed"), Err(PlannerError::MissingDay(_))));
    assert_eq!(agg.nutrients_for_week().calories, 1100.0);
}

#[test]
fn test_week_ingredients_compose_from_days() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    let days: Vec<String> = agg.days().map(str::to_string).collect();
    let per_day: Vec<Vec<IngredientTotal>> = days
        .iter()
        .map(|d| agg.ingredients_for_day(d, &api).unwrap())
        .collect();
    let week = agg.ingredients_for_week(&api);

    let expected = merge_totals(per_day.iter().map(Vec::as_slice));
    assert_eq!(week, expected);

    // Spot checks against hand sums.
    assert_eq!(find(&week, "beef", "g").unwrap().amount, 900.0);
    assert_eq!(find(&week, "milk", "ml").unwrap().amount, 400.0);
    assert_eq!(find(&week, "milk", "cup").unwrap().amount, 1.0);
    assert_eq!(find(&week, "tomato", "").unwrap().amount, 6.0);
}

#[test]
fn test_rows_are_unique_per_name_and_unit() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    let week = agg.ingredients_for_week(&api);
    let mut keys: Vec<(&str, &str)> = week
        .iter()
        .map(|r| (r.name.as_str(), r.unit.as_str()))
        .collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), before);
    assert!(find(&week, "flour", "g").is_some());
    assert!(find(&week, "flour", "tbsp").is_some());
}

#[test]
fn test_each_recipe_fetched_once_across_views() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    agg.ingredients_for_day("mon", &api).unwrap();
    agg.ingredients_for_week(&api);
    agg.ingredients_for_day("tue", &api).unwrap();

    for id in [10, 11, 12, 13] {
        assert_eq!(api.calls_for(id), 1, "recipe {} fetched more than once", id);
    }
    assert_eq!(agg.cached_recipes(), 4);
}

#[test]
fn test_recipe_detail_is_cached() {
    let api = two_day_api();
    let mut agg = MealPlanAggregator::new(two_day_plan());

    let first = agg.recipe_detail(&api, 2).cloned().unwrap();
    let second = agg.recipe_detail(&api, 2).cloned().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.image.as_deref(), Some("https://img.example/2.jpg"));
    assert_eq!(api.calls_for(2), 1);
}

#[test]
fn test_failed_recipe_does_not_block_day() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    let thu = agg.ingredients_for_day("thu", &api).unwrap();
    assert_eq!(
        thu,
        vec![
            IngredientTotal {
                name: "milk".into(),
                unit: "ml".into(),
                amount: 200.0,
            },
            IngredientTotal {
                name: "oats".into(),
                unit: "g".into(),
                amount: 80.0,
            },
        ]
    );
}

#[test]
fn test_failed_recipe_retried_on_next_lookup() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    agg.ingredients_for_day("thu", &api).unwrap();
    agg.ingredients_for_day("thu", &api).unwrap();

    assert_eq!(api.calls_for(99), 2);
    assert_eq!(api.calls_for(10), 1);
}

#[test]
fn test_missing_day_lookups_fail() {
    let api = two_day_api();
    let mut agg = MealPlanAggregator::new(two_day_plan());

    assert!(matches!(agg.meals_for_day("funday"), Err(PlannerError::MissingDay(_))));
    assert!(matches!(agg.meals_for_day("wed"), Err(PlannerError::MissingDay(_))));
    assert!(matches!(agg.meals_for_day("MON"), Err(PlannerError::MissingDay(_))));
    assert!(agg.ingredients_for_day("funday", &api).is_err());
    assert_eq!(api.total_calls(), 0);
}

#[test]
fn test_empty_day_has_no_ingredients() {
    let api = full_week_api();
    let mut agg = MealPlanAggregator::new(full_week_plan());

    assert!(agg.meals_for_day("fri").unwrap().is_empty());
    assert!(agg.ingredients_for_day("fri", &api).unwrap().is_empty());
}

#[test]
fn test_new_plan_starts_with_empty_cache() {
    let api = two_day_api();

    let mut first = MealPlanAggregator::new(two_day_plan());
    first.ingredients_for_week(&api);
    assert_eq!(first.cached_recipes(), 2);

    let mut second = MealPlanAggregator::new(two_day_plan());
    assert_eq!(second.cached_recipes(), 0);
    second.ingredients_for_week(&api);

    assert_eq!(api.calls_for(1), 2);
}
