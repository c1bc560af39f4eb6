// 🖥️ Presentation - renders session events for a terminal or a pipe
// Text mode mirrors the interactive layout; JSON mode emits one line per result

use crate::bmi::Assessment;
use crate::error::Rejection;
use crate::messages::Messages;
use clap::ValueEnum;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 50;
const RESULT_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output seam for the session. Each method maps to one visible event.
pub trait Presenter {
    fn banner(&mut self) -> io::Result<()>;

    /// Start of a round, before the weight prompt
    fn request_data(&mut self) -> io::Result<()>;

    fn prompt(&mut self, text: &str) -> io::Result<()>;

    fn rejected(&mut self, rejection: &Rejection) -> io::Result<()>;

    fn assessment(&mut self, assessment: &Assessment) -> io::Result<()>;

    fn ask_repeat(&mut self) -> io::Result<()>;

    /// Printed between rounds when the user continues
    fn separator(&mut self) -> io::Result<()>;

    fn farewell(&mut self) -> io::Result<()>;

    fn messages(&self) -> &'static Messages;
}

// ============================================================================
// TEXT
// ============================================================================

pub struct TextPresenter<W: Write> {
    out: W,
    messages: &'static Messages,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, messages: &'static Messages) -> Self {
        TextPresenter { out, messages }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn banner(&mut self) -> io::Result<()> {
        let line = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "{line}")?;
        writeln!(self.out, "{}", self.messages.title)?;
        writeln!(self.out, "{line}")?;
        writeln!(self.out)
    }

    fn request_data(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.messages.enter_data)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    fn rejected(&mut self, rejection: &Rejection) -> io::Result<()> {
        match rejection {
            Rejection::NotANumber { .. } => writeln!(self.out, "{}", self.messages.invalid_number),
            Rejection::NotAboveMinimum { minimum, .. } => {
                writeln!(self.out, "{} {minimum}", self.messages.must_exceed)
            }
        }
    }

    fn assessment(&mut self, assessment: &Assessment) -> io::Result<()> {
        let m = self.messages;
        let line = "=".repeat(RESULT_WIDTH);

        writeln!(self.out, "\n{line}")?;
        writeln!(self.out, "{}", m.results)?;
        writeln!(self.out, "{line}")?;
        writeln!(self.out, "{}: {:?} kg", m.weight, assessment.weight_kg)?;
        writeln!(self.out, "{}: {:?} m", m.height, assessment.height_m)?;
        writeln!(self.out, "{}: {}", m.bmi, assessment.bmi_display())?;
        writeln!(self.out, "{}: {}", m.category, m.category_label(assessment.category))?;
        writeln!(self.out, "{line}")?;
        writeln!(self.out, "\n{}: {}", m.note, m.advisory(assessment.category))
    }

    fn ask_repeat(&mut self) -> io::Result<()> {
        write!(self.out, "\n{}", self.messages.repeat_prompt)?;
        self.out.flush()
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(BANNER_WIDTH))
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{}", self.messages.farewell)?;
        writeln!(self.out, "{}", self.messages.goodbye)?;
        self.out.flush()
    }

    fn messages(&self) -> &'static Messages {
        self.messages
    }
}

// ============================================================================
// JSON LINES
// ============================================================================

/// Non-interactive output: only assessments reach stdout.
pub struct JsonPresenter<W: Write> {
    out: W,
    messages: &'static Messages,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W, messages: &'static Messages) -> Self {
        JsonPresenter { out, messages }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn banner(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn request_data(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn rejected(&mut self, rejection: &Rejection) -> io::Result<()> {
        tracing::warn!(%rejection, "input rejected");
        Ok(())
    }

    fn assessment(&mut self, assessment: &Assessment) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, assessment)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn ask_repeat(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn separator(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn farewell(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn messages(&self) -> &'static Messages {
        self.messages
    }
}

// ============================================================================
// TESTS
// ============================================================================
