//! Nutrient scaling factors, running totals and display formatting.
//!
//! # Invariants
//! - Totals treat missing values as 0 and never fail on empty lists.
//! - Display values render with two decimals; absent values render as the
//!   `N/A` sentinel, never `0.00`.

use crate::model::nutrition::{DietEntry, NutritionRecord, REFERENCE_QUANTITY_GRAMS};

/// Placeholder rendered for values that were never measured.
pub const UNKNOWN_AMOUNT: &str = "N/A";

/// Ratio of the consumed quantity to the upstream reference quantity.
pub fn scale_factor(quantity_grams: f64) -> f64 {
    quantity_grams / REFERENCE_QUANTITY_GRAMS
}

/// Sums every numeric nutrient field across `entries`.
pub fn aggregate_totals(entries: &[DietEntry]) -> NutritionRecord {
    let mut totals = NutritionRecord::default();
    for entry in entries {
        totals.accumulate(&entry.nutrition);
    }
    totals
}

/// Formats a nutrient amount for display with two decimal places.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(amount) => format!("{amount:.2}"),
        None => UNKNOWN_AMOUNT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_amount, scale_factor};

    #[test]
    fn scale_factor_is_relative_to_100_grams() {
        assert_eq!(scale_factor(200.0), 2.0);
        assert_eq!(scale_factor(50.0), 0.5);
    }

    #[test]
    fn format_amount_renders_two_decimals_or_sentinel() {
        assert_eq!(format_amount(Some(178.0)), "178.00");
        assert_eq!(format_amount(Some(0.456)), "0.46");
        assert_eq!(format_amount(None), "N/A");
    }
}
