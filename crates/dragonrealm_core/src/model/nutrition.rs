//! Nutrition record and diet entry models.
//!
//! # Invariants
//! - Every numeric nutrient field defaults to 0 when absent upstream.
//! - Scaling multiplies numeric leaves only; `name` is never touched.

use crate::model::entry::{EntryId, Keyed, TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Grams the upstream API reports one record for.
pub const REFERENCE_QUANTITY_GRAMS: f64 = 100.0;

/// Vitamin amounts carried by a nutrition record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vitamins {
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub d: f64,
    #[serde(default)]
    pub e: f64,
}

/// Nutrient amounts for one food, per the upstream reference quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub sodium: f64,
    #[serde(default)]
    pub potassium: f64,
    #[serde(default)]
    pub cholesterol: f64,
    #[serde(default)]
    pub vitamins: Vitamins,
}

impl NutritionRecord {
    /// Returns this record with every numeric leaf multiplied by `factor`.
    ///
    /// # Contract
    /// - Vitamins scale along with the top-level nutrients.
    /// - `name` is preserved unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
            potassium: self.potassium * factor,
            cholesterol: self.cholesterol * factor,
            vitamins: Vitamins {
                a: self.vitamins.a * factor,
                c: self.vitamins.c * factor,
                d: self.vitamins.d * factor,
                e: self.vitamins.e * factor,
            },
        }
    }

    /// Adds every numeric leaf of `other` into this record.
    pub fn accumulate(&mut self, other: &Self) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
        self.sodium += other.sodium;
        self.potassium += other.potassium;
        self.cholesterol += other.cholesterol;
        self.vitamins.a += other.vitamins.a;
        self.vitamins.c += other.vitamins.c;
        self.vitamins.d += other.vitamins.d;
        self.vitamins.e += other.vitamins.e;
    }
}

/// One consumed food: a scaled nutrition record plus entry metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietEntry {
    pub id: EntryId,
    pub timestamp: String,
    /// Consumed quantity in grams.
    pub quantity_grams: f64,
    #[serde(flatten)]
    pub nutrition: NutritionRecord,
}

impl DietEntry {
    /// Creates an entry for `nutrition` already scaled to the consumed
    /// quantity.
    pub fn new(
        id: EntryId,
        quantity_grams: f64,
        nutrition: NutritionRecord,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            quantity_grams,
            nutrition,
        }
    }
}

impl Keyed for DietEntry {
    fn entry_id(&self) -> EntryId {
        self.id
    }
}
