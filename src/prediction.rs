use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::models::{Weekday, WeeklyPlan};
use crate::profile::ActivityDays;

/// Body weight the model was trained around; predictions are shifted by the
/// user's offset from it.
pub const REFERENCE_WEIGHT_KG: f64 = 76.253;

/// Model input for one weekday. Activity columns are 0/1 flags.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub day: Weekday,
    pub calories: f64,
    pub walk: u8,
    pub run: u8,
    pub wine: u8,
    pub weight: u8,
}

fn flag(days: &[Weekday], day: Weekday) -> u8 {
    u8::from(days.contains(&day))
}

/// Seven rows, Monday first. A day missing from the plan has zero calories.
pub fn build_features(plan: &WeeklyPlan, activity: &ActivityDays) -> Vec<FeatureRow> {
    Weekday::ALL
        .into_iter()
        .map(|day| FeatureRow {
            day,
            calories: plan.weekday(day).map_or(0.0, |d| d.nutrients.calories),
            walk: flag(&activity.walking, day),
            run: flag(&activity.running, day),
            wine: flag(&activity.wine, day),
            weight: flag(&activity.weights, day),
        })
        .collect()
}

/// Anything that maps feature rows to one weight value per row.
pub trait Predictor {
    fn predict(&self, rows: &[FeatureRow]) -> Vec<f64>;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coefficients {
    pub calories: f64,
    pub walk: f64,
    pub run: f64,
    pub wine: f64,
    pub weight: f64,
}

/// Linear regression over the feature columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Coefficients,
}

impl Predictor for LinearModel {
    fn predict(&self, rows: &[FeatureRow]) -> Vec<f64> {
        let c = &self.coefficients;
        rows.iter()
            .map(|r| {
                self.intercept
                    + c.calories * r.calories
                    + c.walk * f64::from(r.walk)
                    + c.run * f64::from(r.run)
                    + c.wine * f64::from(r.wine)
                    + c.weight * f64::from(r.weight)
            })
            .collect()
    }
}

/// Decode a model artifact.
pub fn decode_model(bytes: &[u8]) -> Result<LinearModel> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Download and decode the model artifact.
pub fn load_model(url: &str, timeout: Duration) -> Result<LinearModel> {
    let start = Instant::now();
    let client = Client::builder().timeout(timeout).build()?;
    let resp = client.get(url).send()?;

    if !resp.status().is_success() {
        return Err(PlannerError::ModelUnavailable(format!(
            "download failed with status {}",
            resp.status()
        )));
    }

    let bytes = resp.bytes()?;
    let model = decode_model(&bytes)?;

    info!(
        "Model download completed - bytes={}, duration={:.2}s",
        bytes.len(),
        start.elapsed().as_secs_f32()
    );
    Ok(model)
}

/// Projected body weight for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightProjection {
    pub day: Weekday,
    pub weight_kg: f64,
    pub calories: f64,
}

/// Run the model and shift it to the user's current weight.
pub fn project_weights<P>(
    model: &P,
    features: &[FeatureRow],
    user_weight_kg: f64,
) -> Vec<WeightProjection>
where
    P: Predictor + ?Sized,
{
    let offset = REFERENCE_WEIGHT_KG - user_weight_kg;

    features
        .iter()
        .zip(model.predict(features))
        .map(|(row, predicted)| WeightProjection {
            day: row.day,
            weight_kg: predicted - offset,
            calories: row.calories,
        })
        .collect()
}
