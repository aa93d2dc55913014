use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::aggregator::RecipeCache;
use crate::client::{PlanRequest, RecipeApi};
use crate::error::{PlannerError, Result};
use crate::models::{
    IngredientTotal, MealRef, NutrientTotals, RecipeDetail, RecipeId, WeeklyPlan,
};

/// Running totals keyed by `(name, unit)`.
type Totals = BTreeMap<(String, String), f64>;

/// Day and week views over one generated plan.
///
/// Owns the plan together with the recipe cache that belongs to it; a new
/// plan needs a new aggregator so details never leak across plans.
#[derive(Debug)]
pub struct MealPlanAggregator {
    plan: WeeklyPlan,
    cache: RecipeCache,
}

impl MealPlanAggregator {
    pub fn new(plan: WeeklyPlan) -> Self {
        Self {
            plan,
            cache: RecipeCache::new(),
        }
    }

    /// Request a plan and wrap it with a fresh cache.
    ///
    /// A failed request and a plan with no days are both `PlanUnavailable`.
    pub fn generate<A>(api: &A, request: &PlanRequest) -> Result<Self>
    where
        A: RecipeApi + ?Sized,
    {
        let plan = api.generate_plan(request).ok_or(PlannerError::PlanUnavailable)?;

        if plan.is_empty() {
            warn!("Plan generation returned no days");
            return Err(PlannerError::PlanUnavailable);
        }

        Ok(Self::new(plan))
    }

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    /// Day keys present in the plan, in calendar order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.plan.day_keys()
    }

    /// Number of recipe details fetched so far.
    pub fn cached_recipes(&self) -> usize {
        self.cache.len()
    }

    /// Meals planned for `day`. The key must match exactly.
    pub fn meals_for_day(&self, day: &str) -> Result<&[MealRef]> {
        self.plan
            .day(day)
            .map(|d| d.meals.as_slice())
            .ok_or_else(|| PlannerError::MissingDay(day.to_string()))
    }

    pub fn nutrients_for_day(&self, day: &str) -> Result<NutrientTotals> {
        self.plan
            .day(day)
            .map(|d| d.nutrients)
            .ok_or_else(|| PlannerError::MissingDay(day.to_string()))
    }

    /// Sum over the days actually present; a partial week is not an error.
    pub fn nutrients_for_week(&self) -> NutrientTotals {
        self.plan.iter().map(|(_, d)| d.nutrients).sum()
    }

    /// Shopping list for one day.
    ///
    /// Recipes whose detail cannot be fetched contribute nothing; the rest of
    /// the day is still aggregated.
    pub fn ingredients_for_day<A>(&mut self, day: &str, api: &A) -> Result<Vec<IngredientTotal>>
    where
        A: RecipeApi + ?Sized,
    {
        Ok(into_rows(self.day_totals(day, api)?))
    }

    /// Shopping list for the whole plan: every present day's totals summed by key.
    pub fn ingredients_for_week<A>(&mut self, api: &A) -> Vec<IngredientTotal>
    where
        A: RecipeApi + ?Sized,
    {
        let days: Vec<String> = self.plan.day_keys().map(str::to_string).collect();

        let mut per_day = Vec::with_capacity(days.len());
        for day in &days {
            // Keys come from the plan itself, so the lookup cannot miss.
            if let Ok(totals) = self.day_totals(day, api) {
                per_day.push(into_rows(totals));
            }
        }

        merge_totals(per_day.iter().map(Vec::as_slice))
    }

    /// Cache-through recipe lookup for callers that need images or titles.
    pub fn recipe_detail<A>(&mut self, api: &A, id: RecipeId) -> Option<&RecipeDetail>
    where
        A: RecipeApi + ?Sized,
    {
        self.cache.resolve(api, id)
    }

    fn day_totals<A>(&mut self, day: &str, api: &A) -> Result<Totals>
    where
        A: RecipeApi + ?Sized,
    {
        let meals = self
            .plan
            .day(day)
            .map(|d| d.meals.as_slice())
            .ok_or_else(|| PlannerError::MissingDay(day.to_string()))?;

        let mut totals = Totals::new();
        for meal in meals {
            let Some(detail) = self.cache.resolve(api, meal.id) else {
                debug!(
                    "Skipping ingredients for unavailable recipe - day={}, id={}, title={}",
                    day, meal.id, meal.title
                );
                continue;
            };

            for ingredient in &detail.extended_ingredients {
                if ingredient.name.trim().is_empty() {
                    continue;
                }
                let key = (ingredient.name.clone(), ingredient.unit_key().to_string());
                *totals.entry(key).or_insert(0.0) += ingredient.amount;
            }
        }

        Ok(totals)
    }
}

fn into_rows(totals: Totals) -> Vec<IngredientTotal> {
    totals
        .into_iter()
        .map(|((name, unit), amount)| IngredientTotal { name, unit, amount })
        .collect()
}

/// Sum several shopping lists by `(name, unit)`, in the order given.
pub fn merge_totals<'a, I>(lists: I) -> Vec<IngredientTotal>
where
    I: IntoIterator<Item = &'a [IngredientTotal]>,
{
    let mut merged = Totals::new();
    for list in lists {
        for row in list {
            *merged
                .entry((row.name.clone(), row.unit.clone()))
                .or_insert(0.0) += row.amount;
        }
    }
    into_rows(merged)
}
