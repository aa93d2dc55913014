use crate::models::{IngredientTotal, MealRef, NutrientTotals, RecipeDetail};
use crate::prediction::WeightProjection;
use crate::profile::UserProfile;

fn nutrient_line(n: &NutrientTotals) -> String {
    format!(
        "{:>6.0} kcal | protein {:>5.1} g | fat {:>5.1} g | carbs {:>5.1} g",
        n.calories, n.protein, n.fat, n.carbohydrates
    )
}

/// Display the derived profile numbers.
pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Profile ===");
    println!("BMR: {:.0} kcal", profile.basal_metabolic_rate);
    println!(
        "Daily need ({}): {:.0} kcal",
        profile.activity, profile.calories_needed
    );
    if let Some(diet) = profile.diet {
        println!("Diet: {}", diet);
    }
    if !profile.exclude.is_empty() {
        println!("Excluding: {}", profile.exclude.join(", "));
    }
    println!();
}

/// Display one day's meals and nutrients.
pub fn display_day(day: &str, meals: &[MealRef], nutrients: &NutrientTotals) {
    println!("--- {} ---", day);

    if meals.is_empty() {
        println!("  (no meals)");
    }
    for meal in meals {
        let minutes = meal
            .ready_in_minutes
            .map(|m| format!(" ({} min)", m))
            .unwrap_or_default();
        println!("  [{:>7}] {}{}", meal.id, meal.title, minutes);
    }

    println!("  {}", nutrient_line(nutrients));
    println!();
}

/// Display weekly nutrient totals.
pub fn display_week_nutrients(days: usize, totals: &NutrientTotals) {
    println!("=== Total ({} days) ===", days);
    println!("  {}", nutrient_line(totals));
    println!();
}

/// Display a shopping list in aligned columns.
pub fn display_shopping_list(title: &str, rows: &[IngredientTotal]) {
    if rows.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("=== {} ({} items) ===", title, rows.len());

    let max_name_len = rows.iter().map(|r| r.name.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "  {:<width$}  {:>9.2} {}",
            row.name,
            row.amount,
            row.unit,
            width = max_name_len
        );
    }

    println!();
}

/// Display a single recipe.
pub fn display_recipe(detail: &RecipeDetail) {
    println!();
    println!("=== {} [{}] ===", detail.title, detail.id);
    if let Some(image) = &detail.image {
        println!("Image: {}", image);
    }
    if let Some(servings) = detail.servings {
        println!("Servings: {}", servings);
    }
    for ingredient in &detail.extended_ingredients {
        println!(
            "  - {} {} {}",
            ingredient.amount,
            ingredient.unit_key(),
            ingredient.name
        );
    }
    println!();
}

/// Display the weight projection next to planned calories.
pub fn display_projection(projection: &[WeightProjection]) {
    println!("=== Weight projection ===");
    for row in projection {
        println!(
            "  {}  {:>6.2} kg  {:>6.0} kcal",
            row.day, row.weight_kg, row.calories
        );
    }
    println!();
}
