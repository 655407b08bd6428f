//! Nutritionix natural-language nutrient lookup.
//!
//! # Responsibility
//! - Resolve a free-text food query to one typed [`NutritionRecord`].
//! - Decode the loosely-typed upstream payload defensively: every missing
//!   numeric field becomes 0.
//!
//! # Invariants
//! - Returned amounts are per the upstream reference quantity (100 g);
//!   scaling to the consumed quantity is the caller's concern.

use crate::config::NutritionixCredentials;
use crate::model::nutrition::{NutritionRecord, Vitamins};
use crate::remote::{RemoteError, RemoteResult};
use log::{info, warn};
use serde_json::Value;

const NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com";
const NUTRIENTS_PATH: &str = "/v2/natural/nutrients";

// Nutritionix full_nutrients attribute ids for the vitamins we carry.
const VITAMIN_A_ATTR: i64 = 320;
const VITAMIN_C_ATTR: i64 = 401;
const VITAMIN_D_ATTR: i64 = 328;
const VITAMIN_E_ATTR: i64 = 323;

/// Nutrition lookup seam; the HTTP client is one implementation.
pub trait NutritionLookup {
    /// Resolves `query` to a per-100 g nutrition record.
    fn lookup(&self, query: &str) -> RemoteResult<NutritionRecord>;
}

/// Blocking HTTP client for the Nutritionix track API.
pub struct NutritionixClient {
    http: reqwest::blocking::Client,
    credentials: NutritionixCredentials,
    base_url: String,
}

impl NutritionixClient {
    pub fn new(credentials: NutritionixCredentials) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            credentials,
            base_url: NUTRITIONIX_BASE_URL.to_string(),
        }
    }

    /// Builds a client from the process environment.
    ///
    /// # Errors
    /// - `Unconfigured` when either credential variable is missing.
    pub fn from_env() -> RemoteResult<Self> {
        NutritionixCredentials::from_env()
            .map(Self::new)
            .ok_or(RemoteError::Unconfigured("nutritionix"))
    }

    /// Overrides the upstream base URL. Test seam.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl NutritionLookup for NutritionixClient {
    fn lookup(&self, query: &str) -> RemoteResult<NutritionRecord> {
        info!("event=nutrition_lookup module=remote status=start");

        let response = self
            .http
            .post(format!("{}{NUTRIENTS_PATH}", self.base_url))
            .header("x-app-id", &self.credentials.app_id)
            .header("x-app-key", &self.credentials.api_key)
            .json(&serde_json::json!({ "query": query }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=nutrition_lookup module=remote status=error http_status={}",
                status.as_u16()
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json()?;
        let record = parse_first_food(&payload)?;
        info!("event=nutrition_lookup module=remote status=ok");
        Ok(record)
    }
}

/// Decodes the first food of an upstream response.
///
/// Missing numeric fields decode as 0; a response without any food is a
/// decode error.
fn parse_first_food(payload: &Value) -> RemoteResult<NutritionRecord> {
    let food = payload
        .get("foods")
        .and_then(Value::as_array)
        .and_then(|foods| foods.first())
        .ok_or_else(|| RemoteError::Decode("response carries no foods".to_string()))?;

    Ok(NutritionRecord {
        name: food
            .get("food_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        calories: num(food, "nf_calories"),
        protein: num(food, "nf_protein"),
        carbs: num(food, "nf_total_carbohydrate"),
        fat: num(food, "nf_total_fat"),
        fiber: num(food, "nf_dietary_fiber"),
        sugar: num(food, "nf_sugars"),
        sodium: num(food, "nf_sodium"),
        potassium: num(food, "nf_potassium"),
        cholesterol: num(food, "nf_cholesterol"),
        vitamins: Vitamins {
            a: vitamin(food, VITAMIN_A_ATTR),
            c: vitamin(food, VITAMIN_C_ATTR),
            d: vitamin(food, VITAMIN_D_ATTR),
            e: vitamin(food, VITAMIN_E_ATTR),
        },
    })
}

fn num(food: &Value, field: &str) -> f64 {
    food.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn vitamin(food: &Value, attr_id: i64) -> f64 {
    food.get("full_nutrients")
        .and_then(Value::as_array)
        .and_then(|nutrients| {
            nutrients
                .iter()
                .find(|nutrient| nutrient.get("attr_id").and_then(Value::as_i64) == Some(attr_id))
        })
        .and_then(|nutrient| nutrient.get("value").and_then(Value::as_f64))
        .unwrap_or(0.0)
}
