// ⚖️ BMI Calculator - weight over height squared
// Pure arithmetic plus the per-iteration assessment record

use crate::category::Category;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body Mass Index: `weight_kg / height_m²`.
///
/// No validation happens here. Callers pass values that already went
/// through the input validator, so `height_m` is strictly positive.
pub fn body_mass_index(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / height_m.powi(2)
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// One completed calculation: inputs, derived BMI and its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: Category,
    pub assessed_at: DateTime<Utc>,
}

impl Assessment {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        let bmi = body_mass_index(weight_kg, height_m);

        Assessment {
            weight_kg,
            height_m,
            bmi,
            category: Category::classify(bmi),
            assessed_at: Utc::now(),
        }
    }

    /// BMI as shown to the user (2 decimals)
    pub fn bmi_display(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}

// ============================================================================
// TESTS
// ============================================================================
