// 🏷️ Classification - WHO weight categories
// Half-open BMI bands, lower edge inclusive, evaluated in order

use serde::Serialize;

pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
pub const NORMAL_LIMIT: f64 = 25.0;
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25.0
    NormalWeight,
    /// 25.0 <= BMI < 30.0
    Overweight,
    /// BMI >= 30.0
    Obesity,
}

/// Which advisory note accompanies a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Congratulate,
    ConsultProfessional,
    DietAndExercise,
}

impl Category {
    pub fn classify(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Category::Underweight
        } else if bmi < NORMAL_LIMIT {
            Category::NormalWeight
        } else if bmi < OVERWEIGHT_LIMIT {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    /// English display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    pub fn advice(&self) -> Advice {
        match self {
            Category::NormalWeight => Advice::Congratulate,
            Category::Underweight => Advice::ConsultProfessional,
            Category::Overweight | Category::Obesity => Advice::DietAndExercise,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TESTS
// ============================================================================
