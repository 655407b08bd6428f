//! Read-side projections over feature entry lists.
//!
//! # Responsibility
//! - Shape stored entries for presentation: date partitions, completion
//!   aggregates, nutrient totals.
//! - Keep projection logic free of persistence details.

pub mod diary;
pub mod diet;
pub mod quest;
