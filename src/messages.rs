// 🗣️ Message catalog - every user-facing string, per language

use crate::category::{Advice, Category};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Es,
}

#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub title: &'static str,
    pub enter_data: &'static str,
    pub weight_prompt: &'static str,
    pub height_prompt: &'static str,
    pub repeat_prompt: &'static str,
    pub invalid_number: &'static str,
    /// Followed by the minimum, e.g. "... greater than 0"
    pub must_exceed: &'static str,
    pub results: &'static str,
    pub weight: &'static str,
    pub height: &'static str,
    pub bmi: &'static str,
    pub category: &'static str,
    pub note: &'static str,
    pub farewell: &'static str,
    pub goodbye: &'static str,
    locale: Locale,
}

const ENGLISH: Messages = Messages {
    title: "=== BODY MASS INDEX (BMI) CALCULATOR ===",
    enter_data: "Please enter the following data:",
    weight_prompt: "Weight in kilograms: ",
    height_prompt: "Height in meters (e.g., 1.75): ",
    repeat_prompt: "Would you like to calculate another BMI? (y/n): ",
    invalid_number: "Error: Please enter a valid number",
    must_exceed: "Error: The value must be greater than",
    results: "RESULTS:",
    weight: "Weight",
    height: "Height",
    bmi: "BMI",
    category: "Category",
    note: "Note",
    farewell: "Thank you for using the BMI calculator!",
    goodbye: "Goodbye!",
    locale: Locale::En,
};

const SPANISH: Messages = Messages {
    title: "=== CALCULADORA DE ÍNDICE DE MASA CORPORAL (IMC) ===",
    enter_data: "Por favor, ingrese los siguientes datos:",
    weight_prompt: "Peso en kilogramos: ",
    height_prompt: "Estatura en metros (ej: 1.75): ",
    repeat_prompt: "¿Desea calcular otro IMC? (s/n): ",
    invalid_number: "Error: Por favor ingrese un número válido",
    must_exceed: "Error: El valor debe ser mayor que",
    results: "RESULTADOS:",
    weight: "Peso",
    height: "Estatura",
    bmi: "IMC",
    category: "Interpretación",
    note: "Nota",
    farewell: "¡Gracias por usar la calculadora de IMC!",
    goodbye: "¡Hasta luego!",
    locale: Locale::Es,
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Es => &SPANISH,
        }
    }

    pub fn category_label(&self, category: Category) -> &'static str {
        match self.locale {
            Locale::En => category.label(),
            Locale::Es => match category {
                Category::Underweight => "Bajo peso",
                Category::NormalWeight => "Peso normal",
                Category::Overweight => "Sobrepeso",
                Category::Obesity => "Obesidad",
            },
        }
    }

    pub fn advisory(&self, category: Category) -> &'static str {
        match (self.locale, category.advice()) {
            (Locale::En, Advice::Congratulate) => {
                "Congratulations! Your weight is within the healthy range."
            }
            (Locale::En, Advice::ConsultProfessional) => "Consider consulting a health professional.",
            (Locale::En, Advice::DietAndExercise) => {
                "A balanced diet and regular exercise are recommended."
            }
            (Locale::Es, Advice::Congratulate) => {
                "¡Felicidades! Su peso se encuentra en el rango saludable."
            }
            (Locale::Es, Advice::ConsultProfessional) => {
                "Considere consultar con un profesional de la salud."
            }
            (Locale::Es, Advice::DietAndExercise) => {
                "Se recomienda mantener una alimentación balanceada y ejercicio regular."
            }
        }
    }
}
