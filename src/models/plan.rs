use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::models::RecipeId;

/// Calendar weekday, in the order a week plan is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Canonical lowercase plan key (`mon`..`sun`).
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
            Weekday::Sun => "sun",
        }
    }

    /// Match a lowercase plan key, either abbreviated (`mon`) or full (`monday`).
    pub fn from_key(key: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|d| {
            let short = d.key();
            key == short || (key.len() > 3 && key.starts_with(short) && key.ends_with("day"))
        })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        };
        f.write_str(label)
    }
}

/// Lightweight meal reference returned by plan generation. Carries no ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRef {
    pub id: RecipeId,

    pub title: String,

    #[serde(default)]
    pub image_type: Option<String>,

    #[serde(default)]
    pub ready_in_minutes: Option<u32>,

    #[serde(default)]
    pub servings: Option<u32>,

    #[serde(default)]
    pub source_url: Option<String>,
}

impl MealRef {
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_type: None,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
        }
    }
}

/// Macro-nutrient totals for a day or a week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub carbohydrates: f64,
}

impl NutrientTotals {
    pub fn new(calories: f64, protein: f64, fat: f64, carbohydrates: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbohydrates,
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self::Output {
        NutrientTotals {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), Add::add)
    }
}

impl<'a> Sum<&'a NutrientTotals> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a NutrientTotals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Key of the only day in a plan generated for the `day` timeframe.
pub const SINGLE_DAY_KEY: &str = "day";

/// One day of a generated plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub meals: Vec<MealRef>,

    #[serde(default)]
    pub nutrients: NutrientTotals,
}

/// Wire shape of the plan-generation response.
#[derive(Debug, Deserialize)]
struct RawWeeklyPlan {
    week: HashMap<String, DayPlan>,
}

/// A generated week of meals, keyed by lowercase day name.
///
/// Days are stored in calendar order. A day the API did not return is
/// absent, never filled in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawWeeklyPlan")]
pub struct WeeklyPlan {
    days: Vec<(String, DayPlan)>,
}

impl From<RawWeeklyPlan> for WeeklyPlan {
    fn from(raw: RawWeeklyPlan) -> Self {
        WeeklyPlan::from_days(raw.week)
    }
}

impl WeeklyPlan {
    /// Build a plan from `(day key, day)` pairs. Later duplicates win.
    pub fn from_days<K, I>(days: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DayPlan)>,
    {
        let unique: BTreeMap<String, DayPlan> =
            days.into_iter().map(|(k, d)| (k.into(), d)).collect();

        let mut days: Vec<(String, DayPlan)> = unique.into_iter().collect();
        // Unknown keys keep their alphabetical order after the weekdays.
        days.sort_by_key(|(key, _)| {
            Weekday::from_key(key).map_or(Weekday::ALL.len(), |d| d as usize)
        });

        Self { days }
    }

    /// Wrap a one-day response; its key is [`SINGLE_DAY_KEY`].
    pub fn single_day(day: DayPlan) -> Self {
        Self {
            days: vec![(SINGLE_DAY_KEY.to_string(), day)],
        }
    }

    /// Look up a day by its exact key.
    pub fn day(&self, key: &str) -> Option<&DayPlan> {
        self.days.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    /// Present day keys in calendar order.
    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(k, d)| (k.as_str(), d))
    }

    /// True when all seven weekdays are present.
    pub fn is_complete(&self) -> bool {
        Weekday::ALL
            .iter()
            .all(|wd| self.days.iter().any(|(k, _)| Weekday::from_key(k) == Some(*wd)))
    }

    /// Day matching a weekday, whichever key style the API used.
    pub fn weekday(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days
            .iter()
            .find(|(k, _)| Weekday::from_key(k) == Some(weekday))
            .map(|(_, d)| d)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
