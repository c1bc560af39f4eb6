// 🔁 Interactive Loop - prompt, compute, display, ask to repeat
// Each state transition is a function; the current state is the only loop flag

use crate::bmi::Assessment;
use crate::error::InputError;
use crate::input::{read_line, read_number, RetryPolicy};
use crate::presenter::Presenter;
use std::io::BufRead;

/// Replies that start another round (compared after trim + lowercase)
pub const CONTINUE_ANSWERS: [&str; 5] = ["s", "si", "sí", "y", "yes"];

pub fn wants_another(response: &str) -> bool {
    let normalized = response.trim().to_lowercase();
    CONTINUE_ANSWERS.contains(&normalized.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Prompting,
    Computing { weight_kg: f64, height_m: f64 },
    Displaying(Assessment),
    AskRepeat,
    Terminated,
}

pub struct Session<R, P> {
    input: R,
    presenter: P,
    policy: RetryPolicy,
    completed: usize,
}

impl<R: BufRead, P: Presenter> Session<R, P> {
    pub fn new(input: R, presenter: P, policy: RetryPolicy) -> Self {
        Session {
            input,
            presenter,
            policy,
            completed: 0,
        }
    }

    /// Run until the user declines or input closes.
    ///
    /// Returns the number of assessments shown. Only I/O failures and an
    /// exhausted attempt budget come back as errors.
    pub fn run(&mut self) -> Result<usize, InputError> {
        self.presenter.banner()?;

        let mut state = SessionState::Prompting;
        while state != SessionState::Terminated {
            state = self.step(state)?;
        }

        tracing::info!(assessments = self.completed, "session finished");
        Ok(self.completed)
    }

    pub fn step(&mut self, state: SessionState) -> Result<SessionState, InputError> {
        let next = match state {
            SessionState::Prompting => self.prompt_measurements(),
            SessionState::Computing { weight_kg, height_m } => {
                Ok(SessionState::Displaying(Assessment::new(weight_kg, height_m)))
            }
            SessionState::Displaying(assessment) => {
                self.presenter.assessment(&assessment)?;
                self.completed += 1;
                tracing::debug!(
                    bmi = assessment.bmi,
                    category = %assessment.category,
                    "assessment displayed"
                );
                Ok(SessionState::AskRepeat)
            }
            SessionState::AskRepeat => self.ask_repeat(),
            SessionState::Terminated => Ok(SessionState::Terminated),
        };

        match next {
            Err(InputError::EndOfInput) => {
                tracing::debug!("input closed, ending session");
                self.terminate()
            }
            other => other,
        }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn prompt_measurements(&mut self) -> Result<SessionState, InputError> {
        let messages = self.presenter.messages();
        self.presenter.request_data()?;

        let weight_kg = read_number(
            &mut self.input,
            &mut self.presenter,
            messages.weight_prompt,
            &self.policy,
        )?;
        let height_m = read_number(
            &mut self.input,
            &mut self.presenter,
            messages.height_prompt,
            &self.policy,
        )?;

        Ok(SessionState::Computing { weight_kg, height_m })
    }

    fn ask_repeat(&mut self) -> Result<SessionState, InputError> {
        self.presenter.ask_repeat()?;
        let response = read_line(&mut self.input)?.ok_or(InputError::EndOfInput)?;

        if wants_another(&response) {
            self.presenter.separator()?;
            Ok(SessionState::Prompting)
        } else {
            self.terminate()
        }
    }

    fn terminate(&mut self) -> Result<SessionState, InputError> {
        self.presenter.farewell()?;
        Ok(SessionState::Terminated)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::messages::{Locale, Messages};
    use crate::presenter::{JsonPresenter, TextPresenter};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_text(script: &str, locale: Locale) -> (usize, String) {
        let presenter = TextPresenter::new(Vec::new(), Messages::for_locale(locale));
        let mut session = Session::new(Cursor::new(script.to_string()), presenter, RetryPolicy::default());

        let completed = session.run().unwrap();
        let output = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        (completed, output)
    }

    #[test]
    fn test_wants_another() {
        assert!(wants_another("y"));
        assert!(wants_another("  YES \n"));
        assert!(wants_another("Sí"));
        assert!(wants_another("si"));
        assert!(wants_another("S"));
        assert!(!wants_another("n"));
        assert!(!wants_another("no"));
        assert!(!wants_another(""));
        assert!(!wants_another("yep"));
    }

    #[test]
    fn test_full_transcript_normal_weight() {
        let (completed, output) = run_text("70\n1.75\nn\n", Locale::En);

        let banner = "=".repeat(50);
        let rule = "=".repeat(30);
        let expected = format!(
            "{banner}\n=== BODY MASS INDEX (BMI) CALCULATOR ===\n{banner}\n\n\
             Please enter the following data:\n\
             Weight in kilograms: Height in meters (e.g., 1.75): \n\
             {rule}\nRESULTS:\n{rule}\n\
             Weight: 70.0 kg\nHeight: 1.75 m\nBMI: 22.86\nCategory: Normal weight\n{rule}\n\n\
             Note: Congratulations! Your weight is within the healthy range.\n\n\
             Would you like to calculate another BMI? (y/n): \n\
             Thank you for using the BMI calculator!\nGoodbye!\n"
        );

        assert_eq!(completed, 1);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_underweight_advisory() {
        let (_, output) = run_text("50\n1.80\nno\n", Locale::En);

        assert!(output.contains("BMI: 15.43\n"));
        assert!(output.contains("Category: Underweight\n"));
        assert!(output.contains("Note: Consider consulting a health professional.\n"));
    }

    #[test]
    fn test_continue_then_stop() {
        let (completed, output) = run_text("70\n1.75\n  Y \n110\n1.70\nn\n", Locale::En);

        assert_eq!(completed, 2);
        assert!(output.contains("BMI: 38.06\n"));
        assert!(output.contains("Category: Obesity\n"));
        assert!(output.contains("Note: A balanced diet and regular exercise are recommended.\n"));
        assert_eq!(output.matches("Please enter the following data:").count(), 2);
        assert_eq!(output.matches("Goodbye!").count(), 1);
    }

    #[test]
    fn test_invalid_input_inside_session() {
        let (completed, output) = run_text("abc\n-5\n70\n0\n1.75\nn\n", Locale::En);

        assert_eq!(completed, 1);
        assert_eq!(output.matches("Error: Please enter a valid number").count(), 1);
        assert_eq!(output.matches("Error: The value must be greater than 0").count(), 2);
        assert!(output.contains("BMI: 22.86\n"));
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let (completed, output) = run_text("70\n", Locale::En);

        assert_eq!(completed, 0);
        assert!(output.ends_with("Thank you for using the BMI calculator!\nGoodbye!\n"));
    }

    #[test]
    fn test_end_of_input_at_repeat_prompt() {
        let (completed, output) = run_text("70\n1.75\n", Locale::En);

        assert_eq!(completed, 1);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_spanish_session() {
        let (_, output) = run_text("70\n1.75\nn\n", Locale::Es);

        assert!(output.contains("=== CALCULADORA DE ÍNDICE DE MASA CORPORAL (IMC) ==="));
        assert!(output.contains("Peso en kilogramos: "));
        assert!(output.contains("Peso: 70.0 kg\n"));
        assert!(output.contains("Estatura: 1.75 m\n"));
        assert!(output.contains("IMC: 22.86\n"));
        assert!(output.contains("Interpretación: Peso normal\n"));
        assert!(output.contains("Nota: ¡Felicidades! Su peso se encuentra en el rango saludable.\n"));
        assert!(output.contains("¿Desea calcular otro IMC? (s/n): "));
        assert!(output.ends_with("¡Hasta luego!\n"));
    }

    #[test]
    fn test_invalid_utf8_answer_ends_session() {
        let presenter = TextPresenter::new(Vec::new(), Messages::for_locale(Locale::Es));
        let mut session = Session::new(Cursor::new(&b"70\n1.75\ns\xed\n"[..]), presenter, RetryPolicy::default());

        assert_eq!(session.run().unwrap(), 1);

        let output = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        assert!(output.ends_with("¡Gracias por usar la calculadora de IMC!\n¡Hasta luego!\n"));
    }

    #[test]
    fn test_invalid_utf8_weight_is_reprompted() {
        let presenter = TextPresenter::new(Vec::new(), Messages::for_locale(Locale::En));
        let mut session = Session::new(Cursor::new(&b"7\xff0\n70\n1.75\nn\n"[..]), presenter, RetryPolicy::default());

        assert_eq!(session.run().unwrap(), 1);

        let output = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        assert_eq!(output.matches("Error: Please enter a valid number").count(), 1);
        assert!(output.contains("BMI: 22.86\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_attempt_budget_surfaces_error() {
        let presenter = TextPresenter::new(Vec::new(), Messages::for_locale(Locale::En));
        let policy = RetryPolicy::default().with_max_attempts(Some(2));
        let mut session = Session::new(Cursor::new("a\nb\n70\n"), presenter, policy);

        let result = session.run();
        assert!(matches!(result, Err(InputError::AttemptsExhausted { attempts: 2 })));
    }

    #[test]
    fn test_step_transitions() {
        let presenter = TextPresenter::new(Vec::new(), Messages::for_locale(Locale::En));
        let mut session = Session::new(Cursor::new("70\n1.75\nyes\n"), presenter, RetryPolicy::default());

        let state = session.step(SessionState::Prompting).unwrap();
        assert_eq!(state, SessionState::Computing { weight_kg: 70.0, height_m: 1.75 });

        let state = session.step(state).unwrap();
        let SessionState::Displaying(assessment) = &state else {
            panic!("expected Displaying, got {state:?}");
        };
        assert_eq!(assessment.category, Category::NormalWeight);

        let state = session.step(state).unwrap();
        assert_eq!(state, SessionState::AskRepeat);

        let state = session.step(state).unwrap();
        assert_eq!(state, SessionState::Prompting);
    }

    #[test]
    fn test_json_session_output() {
        let presenter = JsonPresenter::new(Vec::new(), Messages::for_locale(Locale::En));
        let mut session = Session::new(
            Cursor::new("70\n1.75\ny\nabc\n50\n1.80\nn\n"),
            presenter,
            RetryPolicy::default(),
        );

        assert_eq!(session.run().unwrap(), 2);

        let output = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        let categories: Vec<String> = output
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["category"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(categories, vec!["normal_weight", "underweight"]);
    }
}
