use std::fmt;

use crate::client::Diet;
use crate::models::Weekday;

/// Biological sex used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 6] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Multiplier applied to BMR.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
            ActivityLevel::ExtraActive => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekdays on which each habit happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDays {
    pub walking: Vec<Weekday>,
    pub running: Vec<Weekday>,
    pub wine: Vec<Weekday>,
    pub weights: Vec<Weekday>,
}

impl ActivityDays {
    /// Typical week for an activity level. Sedentary shares the light table.
    pub fn defaults_for(level: ActivityLevel) -> Self {
        use Weekday::*;

        let (walking, running, wine, weights): (&[Weekday], &[Weekday], &[Weekday], &[Weekday]) =
            match level {
                ActivityLevel::Moderate => {
                    (&[Mon, Wed, Fri], &[Tue, Sat], &[Wed, Fri, Sat, Sun], &[Wed])
                }
                ActivityLevel::Active => (
                    &[Mon, Tue, Wed, Thu, Fri],
                    &[Mon, Tue, Thu, Sat],
                    &[Sat, Sun],
                    &[Mon, Wed, Sat],
                ),
                ActivityLevel::VeryActive => (&[Mon, Tue, Wed, Thu, Fri], &[Sat, Sun], &[], &[Sun]),
                ActivityLevel::ExtraActive => (&Weekday::ALL, &Weekday::ALL, &[], &Weekday::ALL),
                ActivityLevel::Sedentary | ActivityLevel::Light => {
                    (&[Mon, Wed, Fri], &[Tue, Thu], &Weekday::ALL, &[Sun])
                }
            };

        Self {
            walking: walking.to_vec(),
            running: running.to_vec(),
            wine: wine.to_vec(),
            weights: weights.to_vec(),
        }
    }
}

/// Harris-Benedict basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    match sex {
        Sex::Male => 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years + 88.362,
        Sex::Female => 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years + 447.593,
    }
}

/// User inputs plus the values derived from them.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,

    pub diet: Option<Diet>,

    pub exclude: Vec<String>,

    pub basal_metabolic_rate: f64,
    pub calories_needed: f64,
    pub activity_days: ActivityDays,
}

impl UserProfile {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age_years: f64,
        sex: Sex,
        activity: ActivityLevel,
        diet: Option<Diet>,
        exclude: Vec<String>,
    ) -> Self {
        let bmr = basal_metabolic_rate(sex, weight_kg, height_cm, age_years);

        Self {
            height_cm,
            weight_kg,
            age_years,
            sex,
            activity,
            diet,
            exclude,
            basal_metabolic_rate: bmr,
            calories_needed: bmr * activity.factor(),
            activity_days: ActivityDays::defaults_for(activity),
        }
    }

    /// Daily calorie target for plan generation, or `None` if not positive.
    pub fn target_calories(&self) -> Option<u32> {
        let rounded = self.calories_needed.round();
        (rounded >= 1.0).then(|| rounded as u32)
    }
}
