// ✅ Input Validator - retry until the user types a usable number

use crate::error::{InputError, Rejection};
use crate::presenter::Presenter;
use std::io::BufRead;

/// How strict a single numeric read is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Accepted values are strictly greater than this
    pub minimum: f64,
    /// `None` re-prompts forever
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            minimum: 0.0,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Parse one line and check it against `minimum`.
///
/// Surrounding whitespace is ignored. `inf` and `NaN` parse as floats but
/// are rejected as not-a-number.
pub fn parse_number(raw: &str, minimum: f64) -> Result<f64, Rejection> {
    let trimmed = raw.trim();
    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Err(Rejection::NotANumber {
                input: trimmed.to_string(),
            })
        }
    };

    if value > minimum {
        Ok(value)
    } else {
        Err(Rejection::NotAboveMinimum { value, minimum })
    }
}

/// Read a line, or `None` once the input is closed.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so a stray Latin-1 byte
/// is an unusable answer rather than an I/O failure.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, InputError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Prompt until `policy` accepts a value.
///
/// Rejections are shown through the presenter and never returned. The loop
/// only ends early on closed input, I/O failure, or when `max_attempts` is
/// set and used up.
pub fn read_number<R, P>(
    input: &mut R,
    presenter: &mut P,
    prompt: &str,
    policy: &RetryPolicy,
) -> Result<f64, InputError>
where
    R: BufRead,
    P: Presenter + ?Sized,
{
    let mut attempts: u32 = 0;

    loop {
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Err(InputError::AttemptsExhausted { attempts });
            }
        }

        presenter.prompt(prompt)?;
        let line = read_line(input)?.ok_or(InputError::EndOfInput)?;
        attempts += 1;

        match parse_number(&line, policy.minimum) {
            Ok(value) => {
                tracing::debug!(prompt = prompt.trim(), value, attempts, "value accepted");
                return Ok(value);
            }
            Err(rejection) => {
                tracing::debug!(%rejection, attempts, "re-prompting");
                presenter.rejected(&rejection)?;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
